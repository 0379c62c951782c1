use thiserror::Error;

/// Errors that abort the parse of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] MalformedHeader),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedHeader {
    #[error("no `outline:` line found")]
    Missing,
    #[error("`outline:` on line {line} has no name")]
    EmptyName { line: usize },
}
