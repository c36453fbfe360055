use thiserror::Error;

/// A selection string that does not reduce to a complete field list.
///
/// `offset` is the byte offset of the offending token, or the input length
/// when the input ended too early.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field selection at offset {offset}: expected {expected}, found {found}")]
pub struct ParseError {
    pub offset: usize,
    pub expected: String,
    pub found: String,
}

impl ParseError {
    pub fn new(offset: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        ParseError {
            offset,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
