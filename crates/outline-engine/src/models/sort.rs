//! Stable alphabetical ordering for presentation.
//!
//! Params, operators and examples keep the order the author wrote them in;
//! only named collections are reordered.

use super::document::{Document, Type};

impl Document {
    /// Sort functions by signature and types by name, recursing into each type.
    pub fn sort(&mut self) {
        self.functions.sort_by(|a, b| a.signature.cmp(&b.signature));
        self.types.sort_by(|a, b| a.name.cmp(&b.name));
        for ty in &mut self.types {
            ty.sort();
        }
    }
}

impl Type {
    /// Sort fields by name and methods by signature.
    pub fn sort(&mut self) {
        self.fields.sort_by(|a, b| a.name.cmp(&b.name));
        self.methods.sort_by(|a, b| a.signature.cmp(&b.signature));
    }
}

/// Sort documents by name, then sort the contents of each.
pub fn sort_documents(docs: &mut [Document]) {
    docs.sort_by(|a, b| a.name.cmp(&b.name));
    for doc in docs {
        doc.sort();
    }
}
