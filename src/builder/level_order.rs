//! Breadth-first construction of the linked form
//!
//! A FIFO work queue of `(node, level)` pairs drives construction: each
//! dequeue either terminates a branch (level reached the target height)
//! or attaches exactly two children and enqueues them. The queue is
//! bounded by `2^height − 1` entries over the whole run and drains
//! monotonically, so the loop always terminates.

use std::collections::VecDeque;

use crate::tree::Node;

/// Build a complete binary tree of the given height, level by level
///
/// The root holds `root`; every other node holds `left(parent)` or
/// `right(parent)`. Height 0 is the empty tree. Branch functions are
/// assumed total; if one panics, the panic propagates to the caller.
///
/// Memory is `O(2^height)` and unguarded — choosing a height that fits
/// is the caller's responsibility.
pub fn level_order<T, L, R>(height: usize, root: T, left: L, right: R) -> Option<Box<Node<T>>>
where
    L: Fn(&T) -> T,
    R: Fn(&T) -> T,
{
    if height == 0 {
        return None;
    }

    let mut tree = Box::new(Node::leaf(root));
    let mut queue: VecDeque<(&mut Box<Node<T>>, usize)> = VecDeque::new();
    queue.push_back((&mut tree, 1));

    while let Some((node, level)) = queue.pop_front() {
        // Nodes at the target height stay leaves
        if level >= height {
            continue;
        }

        let left_value = left(&node.value);
        let right_value = right(&node.value);

        let Node {
            left: left_slot,
            right: right_slot,
            ..
        } = &mut **node;
        let left_child = left_slot.insert(Box::new(Node::leaf(left_value)));
        let right_child = right_slot.insert(Box::new(Node::leaf(right_value)));
        queue.push_back((left_child, level + 1));
        queue.push_back((right_child, level + 1));
    }

    Some(tree)
}
