//! # outline-engine
//!
//! Turns "outline" documentation markup, written inside ordinary comments,
//! into typed [`Document`] trees.
//!
//! ```text
//! outline: time
//!   functions:
//!     now() time
//!       new time instance set to current time
//!   types:
//!     duration
//!       a period of time
//!       fields:
//!         hours float
//! ```
//!
//! Structure comes from indentation alone. See [`parsing`] for the pipeline,
//! [`merge`] for combining documents found in several comments, and [`dump`]
//! for the canonical text form used to compare documents.

pub mod dump;
pub mod merge;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use dump::to_outline_string;
pub use merge::{merge_documents, merge_into};
pub use models::*;
pub use parsing::{IndentPolicy, MalformedHeader, ParseError, Parser, parse, parse_first};
