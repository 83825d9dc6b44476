//! Breadth-first construction of the persistent form
//!
//! Values are computed level by level, breadth-first, exactly as in the
//! linked builder. Linking then runs bottom-up: the deepest level is
//! turned into leaves, and each level above is constructed holding its
//! already-built children. Children therefore exist before their parent
//! node does, and no node is ever replaced after creation.

use std::rc::Rc;

use crate::tree::PersistentNode;

/// Build a complete binary tree of persistent nodes
///
/// Same logical shape and values as
/// [`level_order`](super::level_order); only the node representation
/// differs. Height 0 is the empty tree.
pub fn level_persistent<T, L, R>(
    height: usize,
    root: T,
    left: L,
    right: R,
) -> Option<Rc<PersistentNode<T>>>
where
    L: Fn(&T) -> T,
    R: Fn(&T) -> T,
{
    if height == 0 {
        return None;
    }

    // Level k holds 2^k values in left-to-right order
    let mut levels: Vec<Vec<T>> = Vec::with_capacity(height);
    levels.push(vec![root]);
    for depth in 1..height {
        let parents = &levels[depth - 1];
        let mut next = Vec::with_capacity(parents.len() * 2);
        for value in parents {
            next.push(left(value));
            next.push(right(value));
        }
        levels.push(next);
    }

    // Link bottom-up: node i of a level adopts children 2i and 2i+1
    // of the level below
    let mut below: Vec<Rc<PersistentNode<T>>> = Vec::new();
    for values in levels.into_iter().rev() {
        let mut children = below.into_iter();
        let mut current = Vec::with_capacity(values.len());
        for value in values {
            let left_child = children.next();
            let right_child = children.next();
            current.push(Rc::new(PersistentNode::new(value, left_child, right_child)));
        }
        below = current;
    }

    below.into_iter().next()
}
