//! Depth-first, pre-order traversal of syntax subtrees

use crate::syntax::{NodeKind, SyntaxNode};
use tree_sitter::TreeCursor;

/// Pre-order iterator over a node and all of its descendants.
///
/// Each iterator owns its own cursor, rooted at the start node, so several
/// traversals over different (or the same) subtrees never interfere.
pub struct Preorder<'t> {
    cursor: TreeCursor<'t>,
    source: &'t str,
    started: bool,
    done: bool,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(SyntaxNode::new(self.cursor.node(), self.source));
        }

        if self.cursor.goto_first_child() {
            return Some(SyntaxNode::new(self.cursor.node(), self.source));
        }

        loop {
            if self.cursor.goto_next_sibling() {
                return Some(SyntaxNode::new(self.cursor.node(), self.source));
            }
            // The cursor cannot leave the node it was created on.
            if !self.cursor.goto_parent() {
                self.done = true;
                return None;
            }
        }
    }
}

/// Traverse `node` and its descendants, node first, children in order
pub fn preorder(node: SyntaxNode<'_>) -> Preorder<'_> {
    Preorder {
        cursor: node.raw().walk(),
        source: node.source(),
        started: false,
        done: false,
    }
}

/// First node of `kind` in pre-order, `node` included
pub fn find_first(node: SyntaxNode<'_>, kind: NodeKind) -> Option<SyntaxNode<'_>> {
    preorder(node).find(|n| n.kind() == kind)
}

/// Every node of `kind` in pre-order, `node` included
pub fn collect_kind(node: SyntaxNode<'_>, kind: NodeKind) -> Vec<SyntaxNode<'_>> {
    preorder(node).filter(|n| n.kind() == kind).collect()
}
