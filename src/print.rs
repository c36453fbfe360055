use std::fmt;

use crate::ast::{AstNode, Fields, Path, SubSelection, Wildcard, Word};
use crate::visit::Visit;

/// Writes the canonical text form of a node; parsing the output gives back
/// an equal tree.
struct Printer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl Printer<'_, '_> {
    fn write(&mut self, s: &str) {
        if self.result.is_ok() {
            self.result = self.f.write_str(s);
        }
    }
}

impl<'ast> Visit<'ast> for Printer<'_, '_> {
    fn visit_fields(&mut self, node: &'ast Fields) {
        for (i, field) in node.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.visit_node(field);
        }
    }

    fn visit_path(&mut self, node: &'ast Path) {
        self.visit_node(node.prefix());
        self.write("/");
        self.visit_field(node.suffix());
    }

    fn visit_sub_selection(&mut self, node: &'ast SubSelection) {
        self.visit_name(node.name());
        self.write("(");
        self.visit_fields(node.body());
        self.write(")");
    }

    fn visit_word(&mut self, node: &'ast Word) {
        self.write(node.as_str());
    }

    fn visit_wildcard(&mut self, _node: &'ast Wildcard) {
        self.write("*");
    }
}

pub(crate) fn print<N: AstNode>(node: &N, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut printer = Printer { f, result: Ok(()) };
    node.accept(&mut printer);
    printer.result
}

#[cfg(test)]
mod tests {
    use crate::ast::{Field, Fields, Name, Path, SubSelection, Wildcard, Word};
    use crate::parse;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn print_built_tree() {
        let body = Fields::new(word("id"), Some(Fields::new(Wildcard, None)));
        let items = SubSelection::new(word("items"), body);
        let path = Path::new(Path::new(word("a"), Wildcard), word("c"));
        let fields = Fields::new(items, Some(Fields::new(path, None)));

        assert_eq!("items(id,*),a/*/c", fields.to_string());
    }

    #[test]
    fn print_each_shape() {
        assert_eq!("x", word("x").to_string());
        assert_eq!("*", Wildcard.to_string());
        assert_eq!("*", Name::from(Wildcard).to_string());
        assert_eq!("x", Field::from(word("x")).to_string());

        let sub = SubSelection::new(Wildcard, Fields::new(word("y"), None));
        assert_eq!("*(y)", sub.to_string());
        assert_eq!("a/*(y)", Path::new(word("a"), sub).to_string());
    }

    #[test]
    fn round_trip() {
        for input in &[
            "a",
            "*",
            "a,b",
            "a/b/c",
            "items(id,name),nextPageToken",
            "a(b(c(d/*)),e),f/g(h)",
            "a(x)/b",
            "with space,ünïcödé",
        ] {
            let fields = parse(input).unwrap();
            let printed = fields.to_string();
            assert_eq!(*input, printed);
            assert_eq!(fields, parse(&printed).unwrap());
        }
    }
}
