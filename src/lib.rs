//! # Parameterized Complete Binary Tree Generation
//!
//! This library builds synthetic complete binary trees of a fixed height
//! from a root value and two branch functions, in three representations
//! that are guaranteed value-for-value identical:
//!
//! 1. **Linked**: owned nodes behind `Box` ([`tree::Node`])
//! 2. **Array**: dense heap-indexed slots (`left = 2i+1`, `right = 2i+2`)
//! 3. **Persistent**: value-semantics nodes behind `Rc`
//!    ([`tree::PersistentNode`])
//!
//! A depth-first [`builder::recursive`] reference builder and a node
//! counter exist to cross-check and benchmark the level-order builders.
//!
//! ## Usage Example
//!
//! ```
//! use treegen::builder;
//!
//! let tree = builder::level_order(4, 4, |x| x * 4, |x| x + 1).unwrap();
//! assert_eq!(tree.value, 4);
//! assert_eq!(tree.left.unwrap().value, 16);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements a key component of the generator
pub mod builder; // Level-order, array, persistent, and recursive builders
pub mod rules; // CLI-facing branch rules over i64
pub mod tree; // Node representations and rendering

// Re-exports for convenience
pub use builder::{count_nodes, level_array, level_order, level_persistent, recursive};
pub use rules::{BranchRule, ParseRuleError};
pub use tree::{node_count, render_slots, Node, PersistentNode};

use std::rc::Rc;

/// Generation parameters over `i64` trees
///
/// Bundles the uniform parameter set of every builder with the stock
/// defaults (height 4, root 4, left `4x`, right `x + 1`). The generic
/// builders in [`builder`] remain the primary API; this is the concrete
/// entry point used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Tree height; 0 produces the empty tree
    pub height: usize,

    /// Root node value
    pub root: i64,

    /// Rule deriving a left child from its parent
    pub left: BranchRule,

    /// Rule deriving a right child from its parent
    pub right: BranchRule,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            height: 4,
            root: 4,
            left: BranchRule::default_left(),
            right: BranchRule::default_right(),
        }
    }
}

impl TreeParams {
    /// Number of nodes every builder will produce: `2^height − 1`
    pub fn expected_nodes(&self) -> usize {
        node_count(self.height)
    }

    /// Build the linked form, level by level
    pub fn build_linked(&self) -> Option<Box<Node<i64>>> {
        let (left, right) = (self.left, self.right);
        builder::level_order(
            self.height,
            self.root,
            move |v| left.apply(*v),
            move |v| right.apply(*v),
        )
    }

    /// Build the array form
    pub fn build_array(&self) -> Vec<Option<i64>> {
        let (left, right) = (self.left, self.right);
        builder::level_array(
            self.height,
            self.root,
            move |v| left.apply(*v),
            move |v| right.apply(*v),
        )
    }

    /// Build the persistent form
    pub fn build_persistent(&self) -> Option<Rc<PersistentNode<i64>>> {
        let (left, right) = (self.left, self.right);
        builder::level_persistent(
            self.height,
            self.root,
            move |v| left.apply(*v),
            move |v| right.apply(*v),
        )
    }

    /// Build the linked form with the depth-first reference builder
    pub fn build_recursive(&self) -> Option<Box<Node<i64>>> {
        let (left, right) = (self.left, self.right);
        builder::recursive(
            self.height,
            self.root,
            move |v| left.apply(*v),
            move |v| right.apply(*v),
        )
    }
}
