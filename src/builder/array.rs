//! Breadth-first construction of the array form
//!
//! Same traversal as [`level_order`](super::level_order), but the tree is
//! packed into a dense heap-indexed sequence: root at slot 0, children of
//! slot `i` at `2i+1` and `2i+2`. For a tree built to height `h`, all
//! `2^h − 1` slots are written exactly once and no slot is read before
//! it is written.

use std::collections::VecDeque;

use crate::tree::node_count;

/// Build a complete binary tree packed into heap-indexed slots
///
/// Returns a sequence of length `2^height − 1` (empty for height 0) in
/// which every slot is `Some`. The `Option` wrapper exists so partially
/// filled sequences are representable mid-construction without reserving
/// a sentinel value of `T`.
pub fn level_array<T, L, R>(height: usize, root: T, left: L, right: R) -> Vec<Option<T>>
where
    L: Fn(&T) -> T,
    R: Fn(&T) -> T,
{
    if height == 0 {
        return Vec::new();
    }

    let max_nodes = node_count(height);
    let mut slots: Vec<Option<T>> = Vec::new();
    slots.resize_with(max_nodes, || None);

    let mut queue: VecDeque<(usize, T, usize)> = VecDeque::new();
    queue.push_back((0, root, 1));

    while let Some((index, value, level)) = queue.pop_front() {
        if level < height {
            let left_value = left(&value);
            let right_value = right(&value);
            let left_index = 2 * index + 1;
            let right_index = 2 * index + 2;
            // In-range for every node of a complete tree; kept as a guard
            if left_index < max_nodes {
                queue.push_back((left_index, left_value, level + 1));
            }
            if right_index < max_nodes {
                queue.push_back((right_index, right_value, level + 1));
            }
        }
        slots[index] = Some(value);
    }

    slots
}
