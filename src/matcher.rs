use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::ast::{AstNode, Fields};
use crate::error::ParseError;

/// A parsed selection, ready to be asked about the paths of a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matcher {
    fields: Fields,
}

impl Matcher {
    pub fn new(selection: &str) -> Result<Self, ParseError> {
        crate::parse(selection).map(Matcher::from)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        let matched = self.fields.matches(path);
        trace!(
            "`{}` {} {:?}",
            self.fields,
            if matched { "selects" } else { "skips" },
            path.iter().map(|s| s.as_ref()).collect::<Vec<&str>>()
        );
        matched
    }

    /// The selection in its canonical text form.
    pub fn pattern(&self) -> String {
        self.fields.to_string()
    }
}

impl From<Fields> for Matcher {
    fn from(fields: Fields) -> Self {
        Matcher { fields }
    }
}

impl FromStr for Matcher {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matcher::new(s)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fields, f)
    }
}
