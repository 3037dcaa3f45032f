//! Named accessors for the node shapes the extractor depends on
//!
//! Every assumption about where the C++ grammar puts a piece of a
//! declaration lives here, so a grammar change touches one function.

use crate::syntax::{NodeKind, SyntaxNode};
use crate::walker;

/// Name of a `class_specifier`: its second child, after the `class` keyword
pub fn class_name_of<'t>(class: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    class.child(1)
}

/// Braced member list of a class, absent for forward declarations
pub fn class_body_of<'t>(class: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    class.child_of_kind(NodeKind::FieldList)
}

/// Leading storage class specifier of a member declaration
pub fn storage_class_of<'t>(declaration: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    declaration
        .child(0)
        .filter(|c| c.kind() == NodeKind::StorageClass)
}

/// Declared `static` (the storage class must come first)
pub fn is_static(declaration: SyntaxNode<'_>) -> bool {
    storage_class_of(declaration).is_some_and(|s| s.text() == "static")
}

/// Direct `function_declarator` child. Plain fields have none.
pub fn function_declarator_of<'t>(declaration: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    declaration.child_of_kind(NodeKind::FunctionDeclarator)
}

/// Method identifier: first child of the function declarator
pub fn declarator_name_of<'t>(declarator: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    declarator.child(0)
}

/// Ordinary and defaulted parameter declarations, in order.
/// `None` when the declarator has no parameter list.
pub fn parameters_of<'t>(declarator: SyntaxNode<'t>) -> Option<Vec<SyntaxNode<'t>>> {
    let list = declarator
        .field("parameters")
        .filter(|l| l.kind() == NodeKind::ParameterList)?;
    Some(
        list.children()
            .into_iter()
            .filter(|p| p.kind().is_parameter())
            .collect(),
    )
}

/// Parameter name: the first identifier anywhere in the parameter
pub fn parameter_name_of<'t>(parameter: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    walker::find_first(parameter, NodeKind::Identifier)
}

/// Default value expression of an `optional_parameter_declaration`.
/// In the plain `type name = value` shape this is the fourth child.
pub fn default_value_of<'t>(parameter: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    if parameter.kind() != NodeKind::OptionalParameter {
        return None;
    }
    parameter.field("default_value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SourceTree;
    use std::path::Path;

    fn parse(source: &str) -> SourceTree {
        SourceTree::parse(source, Path::new("test.h")).unwrap()
    }

    fn first_member<'t>(tree: &'t SourceTree) -> SyntaxNode<'t> {
        walker::preorder(tree.root())
            .find(|n| n.kind().is_member_declaration())
            .unwrap()
    }

    #[test]
    fn test_class_name_and_body() {
        let tree = parse("class Foo : public Bar { public: void f(); };\n");
        let class = walker::find_first(tree.root(), NodeKind::Class).unwrap();
        assert_eq!(class_name_of(class).unwrap().text(), "Foo");
        assert!(class_body_of(class).is_some());
    }

    #[test]
    fn test_forward_declaration_has_no_body() {
        let tree = parse("class Foo;\n");
        let class = walker::find_first(tree.root(), NodeKind::Class).unwrap();
        assert_eq!(class_name_of(class).unwrap().text(), "Foo");
        assert!(class_body_of(class).is_none());
    }

    #[test]
    fn test_static_detection() {
        let tree = parse("class Foo { public: static int make(); };\n");
        let member = first_member(&tree);
        assert_eq!(storage_class_of(member).unwrap().text(), "static");
        assert!(is_static(member));

        let tree = parse("class Foo { public: int make(); };\n");
        assert!(!is_static(first_member(&tree)));
    }

    #[test]
    fn test_plain_field_has_no_declarator() {
        let tree = parse("class Foo { public: int count; };\n");
        assert!(function_declarator_of(first_member(&tree)).is_none());
    }

    #[test]
    fn test_parameters_and_defaults() {
        let tree = parse(
            "class Foo { public: void set(const String &p_key, int p_value = 5, float *p_out); };\n",
        );
        let declarator = function_declarator_of(first_member(&tree)).unwrap();
        assert_eq!(declarator_name_of(declarator).unwrap().text(), "set");

        let params = parameters_of(declarator).unwrap();
        let names: Vec<&str> = params
            .iter()
            .map(|p| parameter_name_of(*p).unwrap().text())
            .collect();
        assert_eq!(names, vec!["p_key", "p_value", "p_out"]);

        let defaults: Vec<&str> = params
            .iter()
            .filter_map(|p| default_value_of(*p))
            .map(|d| d.text())
            .collect();
        assert_eq!(defaults, vec!["5"]);
    }

    #[test]
    fn test_default_value_is_fourth_child_in_plain_shape() {
        let tree = parse("class Foo { public: void f(int y = 5); };\n");
        let declarator = function_declarator_of(first_member(&tree)).unwrap();
        let param = parameters_of(declarator).unwrap()[0];
        assert_eq!(
            default_value_of(param).unwrap().text(),
            param.child(3).unwrap().text()
        );
    }

    #[test]
    fn test_default_value_with_qualified_type() {
        let tree = parse("class Foo { public: void f(const Vector2 &p_at = Vector2()); };\n");
        let declarator = function_declarator_of(first_member(&tree)).unwrap();
        let param = parameters_of(declarator).unwrap()[0];
        assert_eq!(default_value_of(param).unwrap().text(), "Vector2()");
    }

    #[test]
    fn test_empty_parameter_list() {
        let tree = parse("class Foo { public: void f(); };\n");
        let declarator = function_declarator_of(first_member(&tree)).unwrap();
        assert!(parameters_of(declarator).unwrap().is_empty());
    }
}
