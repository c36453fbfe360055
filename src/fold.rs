//! Building new trees out of existing ones.
//!
//! A `Fold` produces a fresh node for every node it is handed. The default
//! methods rebuild each shape from the folded children, so an implementation
//! that overrides nothing is a deep copy; rewrites override the shapes they
//! change.
use crate::ast::{AstNode, Field, Fields, Name, Node, Path, SubSelection, Wildcard, Word};

pub trait Fold {
    fn fold_fields(&mut self, node: &Fields) -> Fields {
        fold_fields(self, node)
    }

    fn fold_node(&mut self, node: &Node) -> Node {
        fold_node(self, node)
    }

    fn fold_path(&mut self, node: &Path) -> Path {
        fold_path(self, node)
    }

    fn fold_field(&mut self, node: &Field) -> Field {
        fold_field(self, node)
    }

    fn fold_sub_selection(&mut self, node: &SubSelection) -> SubSelection {
        fold_sub_selection(self, node)
    }

    fn fold_name(&mut self, node: &Name) -> Name {
        fold_name(self, node)
    }

    fn fold_word(&mut self, node: &Word) -> Word {
        fold_word(self, node)
    }

    fn fold_wildcard(&mut self, node: &Wildcard) -> Wildcard {
        fold_wildcard(self, node)
    }
}

/// Folds every alternative in order, then links the results back up.
pub fn fold_fields<F: Fold + ?Sized>(folder: &mut F, node: &Fields) -> Fields {
    let first = folder.fold_node(node.field());
    let rest = node.iter().skip(1).map(|field| folder.fold_node(field)).collect();
    Fields::from_parts(first, rest)
}

pub fn fold_node<F: Fold + ?Sized>(folder: &mut F, node: &Node) -> Node {
    match node {
        Node::Field(field) => Node::Field(folder.fold_field(field)),
        Node::Path(path) => Node::Path(Box::new(folder.fold_path(path))),
    }
}

pub fn fold_path<F: Fold + ?Sized>(folder: &mut F, node: &Path) -> Path {
    let prefix = folder.fold_node(node.prefix());
    let suffix = folder.fold_field(node.suffix());
    Path::new(prefix, suffix)
}

pub fn fold_field<F: Fold + ?Sized>(folder: &mut F, node: &Field) -> Field {
    match node {
        Field::Name(name) => Field::Name(folder.fold_name(name)),
        Field::SubSelection(sub_selection) => {
            Field::SubSelection(folder.fold_sub_selection(sub_selection))
        }
    }
}

pub fn fold_sub_selection<F: Fold + ?Sized>(folder: &mut F, node: &SubSelection) -> SubSelection {
    let name = folder.fold_name(node.name());
    let body = folder.fold_fields(node.body());
    SubSelection::new(name, body)
}

pub fn fold_name<F: Fold + ?Sized>(folder: &mut F, node: &Name) -> Name {
    match node {
        Name::Word(word) => Name::Word(folder.fold_word(word)),
        Name::Wildcard(wildcard) => Name::Wildcard(folder.fold_wildcard(wildcard)),
    }
}

/// Copies the text into a new allocation.
pub fn fold_word<F: Fold + ?Sized>(_folder: &mut F, node: &Word) -> Word {
    Word::new_unchecked(node.as_str())
}

pub fn fold_wildcard<F: Fold + ?Sized>(_folder: &mut F, node: &Wildcard) -> Wildcard {
    *node
}

/// The identity fold.
#[derive(Debug, Default, Clone, Copy)]
pub struct Copier;

impl Fold for Copier {}

/// Deep copy of `node`; the copy shares no storage with the original.
pub fn copy<N: AstNode>(node: &N) -> N {
    node.fold_with(&mut Copier)
}
