//! This crate provides an AVL tree: a Binary Search Tree that keeps itself balanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`).
//!
//! ## AVL Tree
//!
//! An AVL tree adds one more invariant: for every `Node`, the heights of its left and right
//! subtrees differ by at most one. Insertions and deletions restore it with rotations on the
//! way back up from the modified leaf, which keeps the height below `1.44 * lg(N + 2)`.
//!
//! The [`tree`] module has the data structure itself. The [`menu`] module drives a tree from
//! line-based input and is what the `avl` binary runs.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod menu;
pub mod tree;

pub use error::Error;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
