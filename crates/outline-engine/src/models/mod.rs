pub mod document;
pub mod sort;

pub use document::{Document, Example, Field, Function, Operator, Param, Type};
pub use sort::sort_documents;
