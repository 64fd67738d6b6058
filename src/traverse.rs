//! Whole-tree traversals. Every traversal walks the tree with an explicit stack or queue and
//! collects the values it visits, so the result is a snapshot of the tree at call time.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Traversal};
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.traverse(Traversal::InOrder), [&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.traverse(Traversal::PostOrder), [&1, &4, &3, &7, &9, &8, &5]);
//! assert_eq!(tree.display(Traversal::BreadthFirst).to_string(), "5 3 8 1 4 7 9");
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::tree::{Node, OrderedTree};

/// The order in which [`OrderedTree::traverse`] visits values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, then the node, then the right subtree. This yields values in ascending
    /// order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
}

impl<E> OrderedTree<E> {
    /// Collects every value of the tree in the given order.
    pub fn traverse(&self, order: Traversal) -> Vec<&E> {
        let mut values = Vec::with_capacity(self.len());
        match order {
            Traversal::InOrder => in_order(self.root(), &mut values),
            Traversal::PreOrder => pre_order(self.root(), &mut values),
            Traversal::PostOrder => post_order(self.root(), &mut values),
            Traversal::BreadthFirst => breadth_first(self.root(), &mut values),
        }
        values
    }

    /// Shorthand for [`traverse(Traversal::InOrder)`][Self::traverse].
    pub fn in_order(&self) -> Vec<&E> {
        self.traverse(Traversal::InOrder)
    }

    /// Shorthand for [`traverse(Traversal::PreOrder)`][Self::traverse].
    pub fn pre_order(&self) -> Vec<&E> {
        self.traverse(Traversal::PreOrder)
    }

    /// Shorthand for [`traverse(Traversal::PostOrder)`][Self::traverse].
    pub fn post_order(&self) -> Vec<&E> {
        self.traverse(Traversal::PostOrder)
    }

    /// Shorthand for [`traverse(Traversal::BreadthFirst)`][Self::traverse].
    pub fn breadth_first(&self) -> Vec<&E> {
        self.traverse(Traversal::BreadthFirst)
    }

    /// Formats the tree's values in the given order, separated by single spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Traversal};
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in ["m", "c", "x"] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(format!("{}", tree.display(Traversal::InOrder)), "c m x");
    /// assert_eq!(OrderedTree::<u8>::new().display(Traversal::PreOrder).to_string(), "");
    /// ```
    pub fn display(&self, order: Traversal) -> TraversalDisplay<'_, E> {
        TraversalDisplay { tree: self, order }
    }
}

/// Helper returned by [`OrderedTree::display`] that writes a traversal with [`fmt::Display`].
pub struct TraversalDisplay<'a, E> {
    tree: &'a OrderedTree<E>,
    order: Traversal,
}

impl<'a, E> fmt::Display for TraversalDisplay<'a, E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.tree.traverse(self.order).into_iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

pub(crate) fn in_order<'a, E>(root: Option<&'a Node<E>>, out: &mut Vec<&'a E>) {
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        match stack.pop() {
            Some(node) => {
                out.push(&node.value);
                current = node.right.as_deref();
            }
            None => break,
        }
    }
}

pub(crate) fn pre_order<'a, E>(root: Option<&'a Node<E>>, out: &mut Vec<&'a E>) {
    let mut stack: Vec<&Node<E>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(&node.value);
        // Right goes on first so the left subtree is visited first.
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
}

/// Reverses a node-right-left walk, which is exactly left-right-node.
pub(crate) fn post_order<'a, E>(root: Option<&'a Node<E>>, out: &mut Vec<&'a E>) {
    let start = out.len();
    let mut stack: Vec<&Node<E>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(&node.value);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }

    out[start..].reverse();
}

pub(crate) fn breadth_first<'a, E>(root: Option<&'a Node<E>>, out: &mut Vec<&'a E>) {
    let mut queue: VecDeque<&Node<E>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(&node.value);
        queue.extend(node.children());
    }
}
