//! Read-only traversal of a selection tree.
//!
//! Every `visit_*` method defaults to the matching `walk_*` function, which
//! visits the children of the node in source order. Implementors override the
//! shapes they care about and call `walk_*` themselves when they still want
//! to descend.
//!
//! ```
//! use partial_fields::visit::Visit;
//! use partial_fields::{AstNode, Word};
//!
//! #[derive(Default)]
//! struct Words<'ast>(Vec<&'ast str>);
//!
//! impl<'ast> Visit<'ast> for Words<'ast> {
//!     fn visit_word(&mut self, word: &'ast Word) {
//!         self.0.push(word.as_str());
//!     }
//! }
//!
//! let fields = partial_fields::parse("items(id,*),next").unwrap();
//! let mut words = Words::default();
//! fields.accept(&mut words);
//! assert_eq!(vec!["items", "id", "next"], words.0);
//! ```
use crate::ast::{Field, Fields, Name, Node, Path, SubSelection, Wildcard, Word};

pub trait Visit<'ast> {
    fn visit_fields(&mut self, node: &'ast Fields) {
        walk_fields(self, node)
    }

    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node)
    }

    fn visit_path(&mut self, node: &'ast Path) {
        walk_path(self, node)
    }

    fn visit_field(&mut self, node: &'ast Field) {
        walk_field(self, node)
    }

    fn visit_sub_selection(&mut self, node: &'ast SubSelection) {
        walk_sub_selection(self, node)
    }

    fn visit_name(&mut self, node: &'ast Name) {
        walk_name(self, node)
    }

    fn visit_word(&mut self, _node: &'ast Word) {}

    fn visit_wildcard(&mut self, _node: &'ast Wildcard) {}
}

/// Every alternative of the list in order. `visit_fields` is called once
/// per comma separated list, not once per link of the `next` chain.
pub fn walk_fields<'ast, V: Visit<'ast> + ?Sized>(visitor: &mut V, node: &'ast Fields) {
    for field in node {
        visitor.visit_node(field);
    }
}

pub fn walk_node<'ast, V: Visit<'ast> + ?Sized>(visitor: &mut V, node: &'ast Node) {
    match node {
        Node::Field(field) => visitor.visit_field(field),
        Node::Path(path) => visitor.visit_path(path),
    }
}

/// `prefix`, then `suffix`.
pub fn walk_path<'ast, V: Visit<'ast> + ?Sized>(visitor: &mut V, node: &'ast Path) {
    visitor.visit_node(node.prefix());
    visitor.visit_field(node.suffix());
}

pub fn walk_field<'ast, V: Visit<'ast> + ?Sized>(visitor: &mut V, node: &'ast Field) {
    match node {
        Field::Name(name) => visitor.visit_name(name),
        Field::SubSelection(sub_selection) => visitor.visit_sub_selection(sub_selection),
    }
}

/// `name`, then `body`.
pub fn walk_sub_selection<'ast, V: Visit<'ast> + ?Sized>(
    visitor: &mut V,
    node: &'ast SubSelection,
) {
    visitor.visit_name(node.name());
    visitor.visit_fields(node.body());
}

pub fn walk_name<'ast, V: Visit<'ast> + ?Sized>(visitor: &mut V, node: &'ast Name) {
    match node {
        Name::Word(word) => visitor.visit_word(word),
        Name::Wildcard(wildcard) => visitor.visit_wildcard(wildcard),
    }
}
