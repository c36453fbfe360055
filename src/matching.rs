//! Deciding whether a selection includes a concrete path.
//!
//! A path is the list of segment names leading from the root of a response
//! to a value, e.g. `["items", "id"]`. Each shape consumes the part of the
//! path it is responsible for and hands the rest to its children. Nothing
//! matches the empty path.
use std::slice;

use crate::ast::{AstNode, Field, Fields, Name, Node, Path, SubSelection, Wildcard, Word};

/// Whether `node` selects `path`.
pub fn matches<N: AstNode, S: AsRef<str>>(node: &N, path: &[S]) -> bool {
    node.matches(path)
}

/// Any alternative is enough.
pub(crate) fn fields<S: AsRef<str>>(node: &Fields, path: &[S]) -> bool {
    node.iter().any(|field| field.matches(path))
}

pub(crate) fn node<S: AsRef<str>>(node: &Node, path: &[S]) -> bool {
    match node {
        Node::Field(field) => field.matches(path),
        Node::Path(p) => p.matches(path),
    }
}

/// The suffix takes the last segment, the prefix everything before it.
pub(crate) fn path<S: AsRef<str>>(node: &Path, path: &[S]) -> bool {
    match path.split_last() {
        Some((last, init)) if !init.is_empty() => {
            node.prefix().matches(init) && node.suffix().matches(slice::from_ref(last))
        }
        _ => false,
    }
}

pub(crate) fn field<S: AsRef<str>>(node: &Field, path: &[S]) -> bool {
    match node {
        Field::Name(name) => name.matches(path),
        Field::SubSelection(sub_selection) => sub_selection.matches(path),
    }
}

/// The name alone selects the whole container; anything deeper has to be
/// selected by the body.
pub(crate) fn sub_selection<S: AsRef<str>>(node: &SubSelection, path: &[S]) -> bool {
    match path.split_first() {
        Some((head, tail)) if node.name().matches(slice::from_ref(head)) => {
            tail.is_empty() || node.body().matches(tail)
        }
        _ => false,
    }
}

pub(crate) fn name<S: AsRef<str>>(node: &Name, path: &[S]) -> bool {
    match node {
        Name::Word(word) => word.matches(path),
        Name::Wildcard(wildcard) => wildcard.matches(path),
    }
}

pub(crate) fn word<S: AsRef<str>>(node: &Word, path: &[S]) -> bool {
    match path {
        [segment] => segment.as_ref() == node.as_str(),
        _ => false,
    }
}

pub(crate) fn wildcard<S: AsRef<str>>(_node: &Wildcard, path: &[S]) -> bool {
    path.len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const EMPTY: [&str; 0] = [];

    fn check(selection: &str, path: &[&str]) -> bool {
        matches(&parse(selection).unwrap(), path)
    }

    #[test]
    fn alternation() {
        assert!(check("a,b", &["a"]));
        assert!(check("a,b", &["b"]));
        assert!(!check("a,b", &["c"]));
        assert!(check("a,b,c", &["c"]));
    }

    #[test]
    fn sequencing() {
        assert!(check("a/b", &["a", "b"]));
        assert!(!check("a/b", &["a"]));
        assert!(!check("a/b", &["b"]));
        assert!(!check("a/b", &["a", "b", "c"]));
        assert!(!check("a/b", &["b", "a"]));

        assert!(check("a/b/c", &["a", "b", "c"]));
        assert!(!check("a/b/c", &["a", "b"]));
        assert!(!check("a/b/c", &["a", "x", "c"]));
    }

    #[test]
    fn sub_selection_scoping() {
        assert!(check("a(b,c)", &["a"]));
        assert!(check("a(b,c)", &["a", "b"]));
        assert!(check("a(b,c)", &["a", "c"]));
        assert!(!check("a(b,c)", &["a", "d"]));
        assert!(!check("a(b,c)", &["a", "b", "c"]));
        assert!(!check("a(b,c)", &["b"]));
    }

    #[test]
    fn nested_sub_selections() {
        let selection = "items(id,author(name,*/url)),nextPageToken";
        assert!(check(selection, &["items", "id"]));
        assert!(check(selection, &["items", "author"]));
        assert!(check(selection, &["items", "author", "name"]));
        assert!(check(selection, &["items", "author", "links", "url"]));
        assert!(!check(selection, &["items", "author", "links", "href"]));
        assert!(!check(selection, &["items", "title"]));
        assert!(check(selection, &["nextPageToken"]));
    }

    #[test]
    fn paths_inside_alternatives() {
        assert!(check("a/b,c", &["a", "b"]));
        assert!(check("a/b,c", &["c"]));
        assert!(!check("a/b,c", &["a", "c"]));
    }

    #[test]
    fn path_ending_in_sub_selection() {
        assert!(check("a/b(c)", &["a", "b"]));
        assert!(!check("a/b(c)", &["a", "x"]));
    }

    #[test]
    fn wildcard() {
        assert!(check("*", &["x"]));
        assert!(check("*", &["anything at all"]));
        assert!(!check("*", &["x", "y"]));
        assert!(check("*/y", &["x", "y"]));
        assert!(check("a(*)", &["a", "z"]));
        assert!(check("*(id)", &["whatever", "id"]));
        assert!(!check("*(id)", &["whatever", "name"]));
    }

    #[test]
    fn case_sensitive_and_exact() {
        assert!(!check("Items", &["items"]));
        assert!(!check("item", &["items"]));
        assert!(!check("items", &["item"]));
        assert!(check("next page", &["next page"]));
    }

    #[test]
    fn empty_path() {
        for selection in &["a", "*", "a,b", "a/b", "a(b)", "*(*)"] {
            assert!(!check(selection, &EMPTY));
        }
        assert!(!Wildcard.matches(&EMPTY));
    }

    #[test]
    fn owned_segments() {
        let fields = parse("items(id)").unwrap();
        let path: Vec<String> = vec!["items".into(), "id".into()];
        assert!(matches(&fields, &path[..]));
        assert!(fields.matches(&path[..]));
    }

    #[test]
    fn individual_shapes() {
        let word = Word::new("a").unwrap();
        assert!(word.matches(&["a"]));
        assert!(!word.matches(&["a", "a"]));

        let fields = parse("a(b)/c").unwrap();
        if let Node::Path(p) = fields.field() {
            assert!(p.prefix().matches(&["a", "b"]));
            assert!(p.suffix().matches(&["c"]));
            assert!(p.matches(&["a", "b", "c"]));
            assert!(p.matches(&["a", "c"]));
            assert!(!p.matches(&["a", "x", "c"]));
        } else {
            panic!("expected a path, got {:?}", fields.field());
        }
    }
}
