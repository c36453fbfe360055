//! Partial response field selections.
//!
//! A selection such as `items(id,name),nextPageToken` names the parts of a
//! response a client wants back:
//!
//! - `a,b` selects `a` and `b`,
//! - `a/b` selects `b` inside `a`,
//! - `a(b,c)` selects `a`, restricted to its children `b` and `c`,
//! - `*` selects any single name.
//!
//! ```
//! let fields = partial_fields::parse("items(id,name),nextPageToken").unwrap();
//!
//! assert!(partial_fields::matches(&fields, &["items", "id"]));
//! assert!(!partial_fields::matches(&fields, &["items", "etag"]));
//! assert_eq!("items(id,name),nextPageToken", fields.to_string());
//! ```
use log::{debug, trace};

pub mod ast;
pub mod error;
pub mod fold;
mod lexer;
mod matcher;
pub mod matching;
mod parser;
mod print;
mod token;
pub mod visit;

// --- Public API ---
pub use ast::{
    Alternatives, AstNode, Field, Fields, Name, Node, Path, SubSelection, Wildcard, Word,
};
pub use error::ParseError;
pub use fold::{copy, Copier, Fold};
pub use matcher::Matcher;
pub use matching::matches;
pub use visit::Visit;

use token::Tokens;

/// Limits applied before any parsing happens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Longest accepted input in bytes; unbounded when `None`.
    pub max_len: Option<usize>,
}

impl ParseOptions {
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Parses a selection. Either the whole input is one field list or nothing
/// is returned.
pub fn parse(input: &str) -> Result<Fields, ParseError> {
    parse_with(input, &ParseOptions::default())
}

pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Fields, ParseError> {
    if let Some(max_len) = options.max_len {
        if input.len() > max_len {
            debug!("rejecting selection of {} bytes", input.len());
            return Err(ParseError::new(
                max_len,
                format!("at most {} bytes", max_len),
                format!("{} bytes", input.len()),
            ));
        }
    }

    // Every character is either reserved punctuation or part of a word.
    let lexemes = match lexer::parse(input) {
        Ok((_, lexemes)) => lexemes,
        Err(e) => unreachable!("lexer rejected {:?}: {:?}", input, e),
    };
    trace!("lexed {:?} into {} tokens", input, lexemes.len());

    parser::parse(Tokens::new(&lexemes, input.len()))
        .map_err(ParseError::from)
        .map_err(|e| {
            debug!("rejecting selection {:?}: {}", input, e);
            e
        })
}
