//! This crate exposes an unbalanced Binary Search Tree (BST) used as an
//! ordered set.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). [`OrderedTree`] does no rebalancing, so inserting
//! values in sorted order degrades it to a linked list with `O(N)` operations. None of its
//! operations recurse, so even such a degenerate tree never exhausts the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Traversal};
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     assert!(tree.insert(x));
//! }
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(5));
//!
//! assert_eq!(tree.in_order(), [&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.display(Traversal::PreOrder).to_string(), "5 3 1 4 8 7 9");
//! ```
//!
//! ## Ordering contract
//!
//! Values are compared with [`Ord`]. The order must be a lawful total order: an `Ord`
//! implementation that is not transitive or antisymmetric silently breaks the BST invariant.
//! To order values differently, wrap them in a newtype or [`std::cmp::Reverse`].
//!
//! ## Threads
//!
//! Nothing is synchronized internally. Sharing a tree between threads that mutate it requires
//! external locking.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use traverse::{Traversal, TraversalDisplay};
pub use tree::{OrderedTree, Parent};
