//! Depth-first reference builder and node counter
//!
//! The recursive builder exists to cross-check and benchmark the
//! level-order builders: for any parameters it must produce a tree that
//! is node-for-node value-equal to theirs. Recursion depth equals the
//! requested height; there is no internal guard, the stack ceiling is a
//! caller constraint.

use crate::tree::Node;

/// Build a complete binary tree depth-first
///
/// Left subtree is built on `left(root)`, right subtree on
/// `right(root)`, each at `height − 1`. Height 0 is the empty tree.
pub fn recursive<T, L, R>(height: usize, root: T, left: L, right: R) -> Option<Box<Node<T>>>
where
    L: Fn(&T) -> T,
    R: Fn(&T) -> T,
{
    if height == 0 {
        return None;
    }
    Some(subtree(height, root, &left, &right))
}

fn subtree<T, L, R>(height: usize, value: T, left: &L, right: &R) -> Box<Node<T>>
where
    L: Fn(&T) -> T,
    R: Fn(&T) -> T,
{
    if height == 1 {
        return Box::new(Node::leaf(value));
    }
    let left_child = subtree(height - 1, left(&value), left, right);
    let right_child = subtree(height - 1, right(&value), left, right);
    Box::new(Node::new(value, Some(left_child), Some(right_child)))
}

/// Count nodes in an optional linked tree
///
/// The empty tree counts 0. Equals `2^height − 1` for any tree produced
/// by the builders in this module.
pub fn count_nodes<T>(tree: Option<&Node<T>>) -> usize {
    tree.map_or(0, Node::count)
}
