//! The syntax tree of a field selection.
//!
//! `items(id,name),nextPageToken` parses to
//!
//! ```text
//! Fields
//! ├── SubSelection(items)
//! │   └── Fields(id, name)
//! └── Fields
//!     └── Name(nextPageToken)
//! ```
//!
//! Nodes are immutable once built and own all of their text.
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ParseError;
use crate::fold::Fold;
use crate::lexer::is_reserved;
use crate::matching;
use crate::print;
use crate::visit::Visit;

/// Behaviour shared by every node shape.
pub trait AstNode: fmt::Debug + fmt::Display + Clone + PartialEq + Eq + Hash + Send + Sync {
    /// Dispatches to the visitor method for this shape.
    fn accept<'ast, V: Visit<'ast> + ?Sized>(&'ast self, visitor: &mut V);

    /// Builds a new node of the same shape through the folder.
    fn fold_with<F: Fold + ?Sized>(&self, folder: &mut F) -> Self;

    /// Whether this node selects the given path of segment names.
    fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool;
}

/// Comma separated alternatives: `a,b/c,d(e)`.
///
/// The alternatives form a chain through `next`. Every operation on the
/// chain, including `Clone`, `PartialEq`, `Hash` and `Drop`, walks it with a
/// loop, so the length of a list is bounded by memory only.
pub struct Fields {
    field: Node,
    next: Option<Box<Fields>>,
}

impl Fields {
    pub fn new(field: impl Into<Node>, next: Option<Fields>) -> Self {
        Fields {
            field: field.into(),
            next: next.map(Box::new),
        }
    }

    /// Links `first` and `rest` in order, building from the back.
    pub(crate) fn from_parts(first: Node, rest: Vec<Node>) -> Self {
        let next = rest
            .into_iter()
            .rev()
            .fold(None, |next, field| Some(Fields::new(field, next)));
        Fields::new(first, next)
    }

    pub fn field(&self) -> &Node {
        &self.field
    }

    pub fn next(&self) -> Option<&Fields> {
        self.next.as_deref()
    }

    /// The alternatives in source order.
    pub fn iter(&self) -> Alternatives<'_> {
        Alternatives { next: Some(self) }
    }
}

pub struct Alternatives<'a> {
    next: Option<&'a Fields>,
}

impl<'a> Iterator for Alternatives<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let fields = self.next?;
        self.next = fields.next();
        Some(fields.field())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Node;
    type IntoIter = Alternatives<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Clone for Fields {
    fn clone(&self) -> Self {
        Fields::from_parts(self.field.clone(), self.iter().skip(1).cloned().collect())
    }
}

impl PartialEq for Fields {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Fields {}

impl Hash for Fields {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for field in self {
            field.hash(state);
        }
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fields").field(&self.iter().collect::<Vec<_>>()).finish()
    }
}

impl Drop for Fields {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut fields) = next {
            next = fields.next.take();
        }
    }
}

/// Anything that can stand left of a `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Field(Field),
    Path(Box<Path>),
}

/// `prefix/suffix`; `a/b/c` nests as `Path(Path(a, b), c)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    prefix: Node,
    suffix: Field,
}

impl Path {
    pub fn new(prefix: impl Into<Node>, suffix: impl Into<Field>) -> Self {
        Path {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &Node {
        &self.prefix
    }

    pub fn suffix(&self) -> &Field {
        &self.suffix
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name(Name),
    SubSelection(SubSelection),
}

/// `name(body)`: the body only applies below `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubSelection {
    name: Name,
    body: Box<Fields>,
}

impl SubSelection {
    pub fn new(name: impl Into<Name>, body: Fields) -> Self {
        SubSelection {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn body(&self) -> &Fields {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Name {
    Word(Word),
    Wildcard(Wildcard),
}

/// A literal segment name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Checks that `value` is a non-empty run of non-reserved characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ParseError::new(0, "a field name", "end of input"));
        }
        match value.char_indices().find(|&(_, c)| is_reserved(c)) {
            Some((offset, c)) => Err(ParseError::new(
                offset,
                "a field name character",
                format!("`{}`", c),
            )),
            None => Ok(Word(value)),
        }
    }

    /// For text the lexer already delimited.
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Word(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `*`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wildcard;

// Conversions {{{
macro_rules! impl_from {
    ($($from:ident => $to:ident :: $variant:ident;)*) => {
        $(
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    $to::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    Word => Name::Word;
    Wildcard => Name::Wildcard;
    Word => Field::Name;
    Wildcard => Field::Name;
    Name => Field::Name;
    SubSelection => Field::SubSelection;
    Word => Node::Field;
    Wildcard => Node::Field;
    Name => Node::Field;
    SubSelection => Node::Field;
    Field => Node::Field;
    Path => Node::Path;
}
// }}}

macro_rules! ast_node {
    ($($ty:ident => $visit:ident, $fold:ident, $matches:ident;)*) => {
        $(
            impl AstNode for $ty {
                fn accept<'ast, V: Visit<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
                    visitor.$visit(self)
                }

                fn fold_with<F: Fold + ?Sized>(&self, folder: &mut F) -> Self {
                    folder.$fold(self)
                }

                fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
                    matching::$matches(self, path)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    print::print(self, f)
                }
            }
        )*
    };
}

ast_node! {
    Fields => visit_fields, fold_fields, fields;
    Node => visit_node, fold_node, node;
    Path => visit_path, fold_path, path;
    Field => visit_field, fold_field, field;
    SubSelection => visit_sub_selection, fold_sub_selection, sub_selection;
    Name => visit_name, fold_name, name;
    Word => visit_word, fold_word, word;
    Wildcard => visit_wildcard, fold_wildcard, wildcard;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_validation() {
        assert_eq!("items", Word::new("items").unwrap().as_str());
        assert_eq!("next page", Word::new("next page").unwrap().as_str());

        let err = Word::new("").unwrap_err();
        assert_eq!(0, err.offset);

        let err = Word::new("ab/c").unwrap_err();
        assert_eq!(2, err.offset);
        assert_eq!("`/`", err.found);

        assert!(Word::new("*").is_err());
        assert!(Word::new("a(b)").is_err());
    }

    #[test]
    fn conversions() {
        let word = Word::new("a").unwrap();

        let node: Node = word.clone().into();
        assert_eq!(Node::Field(Field::Name(Name::Word(word))), node);

        let node: Node = Wildcard.into();
        assert_eq!(Node::Field(Field::Name(Name::Wildcard(Wildcard))), node);
    }

    #[test]
    fn accessors() {
        let a = Word::new("a").unwrap();
        let b = Word::new("b").unwrap();
        let path = Path::new(a.clone(), b.clone());
        assert_eq!(&Node::from(a.clone()), path.prefix());
        assert_eq!(&Field::from(b.clone()), path.suffix());

        let fields = Fields::new(path, Some(Fields::new(b.clone(), None)));
        assert!(matches!(fields.field(), Node::Path(_)));
        assert_eq!(Some(&Fields::new(b, None)), fields.next());

        let sub = SubSelection::new(a.clone(), fields.clone());
        assert_eq!(&Name::Word(a), sub.name());
        assert_eq!(&fields, sub.body());
    }

    #[test]
    fn alternatives_in_order() {
        let a = Word::new("a").unwrap();
        let b = Word::new("b").unwrap();
        let rest = vec![b.clone().into(), a.clone().into()];
        let fields = Fields::from_parts(a.clone().into(), rest);

        let alternatives: Vec<&Node> = fields.iter().collect();
        let expected = vec![Node::from(a.clone()), Node::from(b), Node::from(a)];
        assert_eq!(expected.iter().collect::<Vec<_>>(), alternatives);
        assert_eq!(fields, fields.clone());
        assert_ne!(fields, Fields::new(Wildcard, None));
    }

    #[test]
    fn ast_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fields>();
    }
}

// vim: fdm=marker
