//! Syntax tree provider for C++ headers
//!
//! Wraps a tree-sitter tree together with its source text. Nodes are handed
//! out as [`SyntaxNode`]s whose grammar kind is already mapped onto
//! [`NodeKind`], so the extractor matches on an enum instead of strings.

use autobind_api::{BindError, BindResult};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// Grammar node kinds the extractor cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `class_specifier`
    Class,
    /// `field_declaration_list`, the braced class body
    FieldList,
    /// `access_specifier` (`public`, `protected`, `private`)
    AccessSpecifier,
    Comment,
    /// `field_declaration`, a member declared without a body
    FieldDeclaration,
    /// `function_definition`, a member defined inline
    FunctionDefinition,
    /// `declaration`, used for constructors and destructors in class bodies
    Declaration,
    /// `storage_class_specifier` (`static`, `extern`, ...)
    StorageClass,
    FunctionDeclarator,
    ParameterList,
    /// `parameter_declaration`
    Parameter,
    /// `optional_parameter_declaration`, a parameter with a default value
    OptionalParameter,
    Identifier,
    Other,
}

impl NodeKind {
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "class_specifier" => NodeKind::Class,
            "field_declaration_list" => NodeKind::FieldList,
            "access_specifier" => NodeKind::AccessSpecifier,
            "comment" => NodeKind::Comment,
            "field_declaration" => NodeKind::FieldDeclaration,
            "function_definition" => NodeKind::FunctionDefinition,
            "declaration" => NodeKind::Declaration,
            "storage_class_specifier" => NodeKind::StorageClass,
            "function_declarator" => NodeKind::FunctionDeclarator,
            "parameter_list" => NodeKind::ParameterList,
            "parameter_declaration" => NodeKind::Parameter,
            "optional_parameter_declaration" => NodeKind::OptionalParameter,
            "identifier" => NodeKind::Identifier,
            _ => NodeKind::Other,
        }
    }

    /// Member declarations that may declare a method
    pub fn is_member_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::FieldDeclaration | NodeKind::FunctionDefinition | NodeKind::Declaration
        )
    }

    pub fn is_parameter(self) -> bool {
        matches!(self, NodeKind::Parameter | NodeKind::OptionalParameter)
    }
}

/// A node of a [`SourceTree`] with access to its text
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    node: Node<'t>,
    source: &'t str,
}

impl<'t> SyntaxNode<'t> {
    pub(crate) fn new(node: Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_grammar(self.node.kind())
    }

    /// Kind name as spelled by the grammar
    pub fn grammar_kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn text(&self) -> &'t str {
        self.source.get(self.node.byte_range()).unwrap_or("")
    }

    /// Positional child, counting anonymous tokens
    pub fn child(&self, index: usize) -> Option<SyntaxNode<'t>> {
        self.node
            .child(index)
            .map(|n| SyntaxNode::new(n, self.source))
    }

    pub fn field(&self, name: &str) -> Option<SyntaxNode<'t>> {
        self.node
            .child_by_field_name(name)
            .map(|n| SyntaxNode::new(n, self.source))
    }

    /// All children in order, anonymous tokens included
    pub fn children(&self) -> Vec<SyntaxNode<'t>> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|n| SyntaxNode::new(n, self.source))
            .collect()
    }

    /// First direct child of the given kind
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<SyntaxNode<'t>> {
        self.children().into_iter().find(|c| c.kind() == kind)
    }

    /// 1-indexed line and 0-indexed column of the node start
    pub fn position(&self) -> (usize, usize) {
        let point = self.node.start_position();
        (point.row + 1, point.column)
    }

    pub(crate) fn raw(&self) -> Node<'t> {
        self.node
    }

    pub(crate) fn source(&self) -> &'t str {
        self.source
    }
}

impl std::fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, column) = self.position();
        write!(f, "{}@{}:{}", self.grammar_kind(), line, column)
    }
}

/// A parsed header. Immutable once built.
pub struct SourceTree {
    tree: Tree,
    source: String,
    file_path: PathBuf,
}

impl SourceTree {
    /// Parse header text with the C++ grammar
    pub fn parse(source: &str, file_path: &Path) -> BindResult<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_cpp::language();
        parser
            .set_language(&language)
            .map_err(|e| BindError::ParseFailure(file_path.to_path_buf(), e.to_string()))?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            BindError::ParseFailure(file_path.to_path_buf(), "Failed to parse".to_string())
        })?;

        Ok(Self {
            tree,
            source: source.to_string(),
            file_path: file_path.to_path_buf(),
        })
    }

    /// Parse raw header bytes, rejecting input that is not UTF-8
    pub fn parse_bytes(bytes: Vec<u8>, file_path: &Path) -> BindResult<Self> {
        let source = String::from_utf8(bytes).map_err(|e| {
            BindError::ParseFailure(
                file_path.to_path_buf(),
                format!("malformed encoding: {}", e.utf8_error()),
            )
        })?;
        Self::parse(&source, file_path)
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), &self.source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Whether the grammar had to recover from syntax errors
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Error for a node that does not have the expected shape
    pub fn mismatch(&self, node: SyntaxNode<'_>, detail: impl Into<String>) -> BindError {
        let (line, column) = node.position();
        BindError::StructuralMismatch(self.file_path.clone(), line, column, detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker;

    fn parse(source: &str) -> SourceTree {
        SourceTree::parse(source, Path::new("test.h")).unwrap()
    }

    #[test]
    fn test_parse_header() {
        let tree = parse("class Foo {\npublic:\n    void bar();\n};\n");
        assert_eq!(tree.root().grammar_kind(), "translation_unit");
        assert!(!tree.has_errors());
        assert_eq!(tree.file_path(), Path::new("test.h"));
    }

    #[test]
    fn test_node_kinds_and_text() {
        let tree = parse("class Foo {\npublic:\n    void bar();\n};\n");
        let class = walker::find_first(tree.root(), NodeKind::Class).unwrap();
        assert_eq!(class.kind(), NodeKind::Class);
        assert_eq!(class.child(1).unwrap().text(), "Foo");
        assert!(class.child_of_kind(NodeKind::FieldList).is_some());
    }

    #[test]
    fn test_position_is_one_indexed() {
        let tree = parse("\n\nclass Foo {};\n");
        let class = walker::find_first(tree.root(), NodeKind::Class).unwrap();
        assert_eq!(class.position(), (3, 0));
    }

    #[test]
    fn test_tolerates_syntax_errors() {
        let tree = parse("class Foo {\npublic:\n    void bar(;\n};\n");
        assert!(tree.has_errors());
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let result = SourceTree::parse_bytes(vec![b'c', 0xff, 0xfe], Path::new("bad.h"));
        assert!(matches!(result, Err(BindError::ParseFailure(_, _))));
    }

    #[test]
    fn test_unknown_kinds_are_other() {
        assert_eq!(NodeKind::from_grammar("template_declaration"), NodeKind::Other);
        assert_eq!(
            NodeKind::from_grammar("optional_parameter_declaration"),
            NodeKind::OptionalParameter
        );
    }

    #[test]
    fn test_mismatch_carries_position() {
        let tree = parse("class Foo {};\n");
        let class = walker::find_first(tree.root(), NodeKind::Class).unwrap();
        match tree.mismatch(class, "no name") {
            BindError::StructuralMismatch(path, line, column, detail) => {
                assert_eq!(path, PathBuf::from("test.h"));
                assert_eq!((line, column), (1, 0));
                assert_eq!(detail, "no name");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
