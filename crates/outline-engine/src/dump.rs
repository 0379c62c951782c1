//! Canonical text form of a [`Document`].
//!
//! The dump is outline notation itself, written with a fixed two-space indent
//! and a fixed field order, so two documents are equal exactly when their
//! dumps are. Empty fields and empty sections are left out.
//!
//! Description text is written as-is. A description line that reads as a
//! section keyword, or a document description line starting with `path:`,
//! parses back as structure rather than text.

use std::fmt;

use crate::models::{Document, Example, Function, Type};

const INDENT: &str = "  ";

/// Writes `doc` as canonical outline text.
pub fn to_outline_string(doc: &Document) -> String {
    let mut w = OutlineWriter::default();
    w.document(doc);
    w.out
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_outline_string(self))
    }
}

#[derive(Default)]
struct OutlineWriter {
    out: String,
}

impl OutlineWriter {
    fn line(&mut self, depth: usize, text: &str) {
        // Blank description lines carry no indentation.
        if !text.is_empty() {
            for _ in 0..depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn description(&mut self, depth: usize, description: &str) {
        if description.is_empty() {
            return;
        }
        for text in description.split('\n') {
            self.line(depth, text);
        }
    }

    fn document(&mut self, doc: &Document) {
        self.line(0, &format!("outline: {}", doc.name));
        if !doc.path.is_empty() {
            self.line(1, &format!("path: {}", doc.path));
        }
        self.description(1, &doc.description);

        if !doc.functions.is_empty() {
            self.line(1, "functions:");
            for f in &doc.functions {
                self.function(2, f);
            }
        }
        if !doc.types.is_empty() {
            self.line(1, "types:");
            for t in &doc.types {
                self.type_decl(2, t);
            }
        }
    }

    fn function(&mut self, depth: usize, f: &Function) {
        self.line(depth, &f.signature);
        self.description(depth + 1, &f.description);

        if !f.params.is_empty() {
            self.line(depth + 1, "params:");
            for p in &f.params {
                self.line(depth + 2, join_head(&p.name, &p.ty).as_str());
                self.description(depth + 3, &p.description);
            }
        }
        self.examples(depth + 1, &f.examples);
    }

    fn type_decl(&mut self, depth: usize, t: &Type) {
        self.line(depth, &t.name);
        self.description(depth + 1, &t.description);

        if !t.fields.is_empty() {
            self.line(depth + 1, "fields:");
            for field in &t.fields {
                self.line(depth + 2, &field.name);
                self.description(depth + 3, &field.description);
            }
        }
        if !t.methods.is_empty() {
            self.line(depth + 1, "methods:");
            for m in &t.methods {
                self.function(depth + 2, m);
            }
        }
        if !t.operators.is_empty() {
            self.line(depth + 1, "operators:");
            for op in &t.operators {
                self.line(depth + 2, &op.expression);
            }
        }
        self.examples(depth + 1, &t.examples);
    }

    fn examples(&mut self, depth: usize, examples: &[Example]) {
        if examples.is_empty() {
            return;
        }
        self.line(depth, "examples:");
        for e in examples {
            self.line(depth + 1, join_head(&e.filename, &e.name).as_str());
            self.description(depth + 2, &e.description);
        }
    }
}

fn join_head(head: &str, rest: &str) -> String {
    if rest.is_empty() {
        head.to_string()
    } else {
        format!("{head} {rest}")
    }
}
