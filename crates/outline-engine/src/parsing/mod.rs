//! # Outline Parsing
//!
//! Indentation-structured parsing with no explicit delimiters.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is measured and
//!    classified on its own into a `LineClass` (indent, trimmed content,
//!    blank / header / path / section keyword / text)
//!
//! 2. **Segmentation** (`scan`): the `DocumentScanner` cuts the classified
//!    lines into one segment per `outline:` header
//!
//! 3. **Block Construction** (`tree`): a `BlockBuilder` drives the
//!    `IndentTracker` and records each segment as an arena of nested blocks
//!
//! 4. **Entity Building** (`entities`): typed sub-parsers walk the blocks and
//!    produce the [`Document`] model
//!
//! ## Key Invariants
//!
//! - Depth is decided by comparing indentation columns, never by a fixed unit
//! - Unrecognized input is description text; only a missing or nameless
//!   header is an error, and it only affects its own document
//! - Descriptions keep interior blank lines and drop leading/trailing ones

pub mod classify;
pub mod description;
pub mod entities;
pub mod error;
pub mod indent;
pub mod lines;
pub mod scan;
pub mod tree;

#[cfg(test)]
mod tests;

use crate::models::Document;

use classify::OutlineLineClassifier;
use lines::lines_with_numbers;
use scan::{DocumentScanner, Segment};
use tree::BlockBuilder;

pub use error::{MalformedHeader, ParseError};
pub use indent::IndentPolicy;

/// Parses outline documents out of comment text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser {
    classifier: OutlineLineClassifier,
}

impl Parser {
    pub fn new(policy: IndentPolicy) -> Self {
        Self {
            classifier: OutlineLineClassifier::new(policy),
        }
    }

    pub fn with_tab_width(tab_width: usize) -> Self {
        Self::new(IndentPolicy::new(tab_width))
    }

    /// Parses every document in `input`, in order of appearance.
    ///
    /// Each `outline:` header yields one entry; a malformed header fails only
    /// its own entry.
    pub fn parse(&self, input: &str) -> Vec<Result<Document, ParseError>> {
        self.segments(input).map(|s| assemble(&s)).collect()
    }

    /// Parses the first document in `input` and stops.
    pub fn parse_first(&self, input: &str) -> Result<Document, ParseError> {
        match self.segments(input).next() {
            Some(segment) => assemble(&segment),
            None => Err(MalformedHeader::Missing.into()),
        }
    }

    fn segments<'a>(&self, input: &'a str) -> impl Iterator<Item = Segment<'a>> {
        let classifier = self.classifier;
        DocumentScanner::new(lines_with_numbers(input).map(move |lr| classifier.classify(&lr)))
    }
}

/// Parses every document in `input` with the default indent policy.
pub fn parse(input: &str) -> Vec<Result<Document, ParseError>> {
    Parser::default().parse(input)
}

/// Parses the first document in `input` with the default indent policy.
pub fn parse_first(input: &str) -> Result<Document, ParseError> {
    Parser::default().parse_first(input)
}

fn assemble(segment: &Segment<'_>) -> Result<Document, ParseError> {
    let name = segment.name();
    if name.is_empty() {
        return Err(MalformedHeader::EmptyName {
            line: segment.header.number,
        }
        .into());
    }

    let mut builder = BlockBuilder::new();
    for line in &segment.body {
        builder.push(*line);
    }
    let tree = builder.finish();

    Ok(entities::document(&tree, name))
}
