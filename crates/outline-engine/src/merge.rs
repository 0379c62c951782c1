//! Union of documents that share a name.
//!
//! The same `outline:` name often appears in several comments (one per source
//! file). Merging fills in whichever of `description`/`path` is still empty
//! and appends entity lists; nothing is deduplicated.

use std::collections::HashMap;

use crate::models::Document;

/// Merge `other` into `target`. `target` keeps any non-empty description or
/// path it already has.
pub fn merge_into(target: &mut Document, other: Document) {
    if target.description.is_empty() {
        target.description = other.description;
    }
    if target.path.is_empty() {
        target.path = other.path;
    }
    target.functions.extend(other.functions);
    target.types.extend(other.types);
}

/// Merge documents by name, in the order each name first appears.
pub fn merge_documents(docs: impl IntoIterator<Item = Document>) -> Vec<Document> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Document> = Vec::new();

    for doc in docs {
        if let Some(&i) = index.get(&doc.name) {
            merge_into(&mut merged[i], doc);
        } else {
            index.insert(doc.name.clone(), merged.len());
            merged.push(doc);
        }
    }

    merged
}
