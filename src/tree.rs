//! An unbalanced BST that owns its nodes through `Box`ed child links. Nodes never point back to
//! their parents: operations that need a parent (like [`OrderedTree::remove`] and
//! [`OrderedTree::parent_of`]) re-walk from the root instead.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Parent};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.max().is_err());
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is rejected.
//! assert!(!tree.insert(1));
//!
//! assert_eq!(tree.parent_of(&1), Parent::Node(&2));
//! assert_eq!(tree.max(), Ok(&2));
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::TreeError;
use crate::traverse;

/// An exclusively owned, possibly absent, child.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// A single value and its two children.
///
/// `Node` deliberately has no `Drop` implementation so values can be moved out of it during
/// removal. Whole subtrees are released by [`release`].
pub(crate) struct Node<E> {
    pub(crate) value: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Node<E> {
    fn new_boxed(value: E) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The present children of this node, left first.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

/// The answer to [`OrderedTree::parent_of`].
#[derive(Debug, PartialEq, Eq)]
pub enum Parent<'a, E> {
    /// The value is stored below the node holding this value.
    Node(&'a E),
    /// The value is stored at the root, so it has no parent.
    Root,
    /// The value is not in the tree.
    Absent,
}

impl<'a, E> Clone for Parent<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, E> Copy for Parent<'a, E> {}

impl<'a, E> Parent<'a, E> {
    /// The parent's value, if any. This folds [`Parent::Root`] and [`Parent::Absent`] together.
    pub fn value(self) -> Option<&'a E> {
        match self {
            Self::Node(value) => Some(value),
            Self::Root | Self::Absent => None,
        }
    }
}

/// An unbalanced Binary Search Tree holding unique values ordered by [`Ord`]. This can be used
/// for inserting, finding, and removing values as well as asking structural questions about the
/// tree.
pub struct OrderedTree<E> {
    root: Link<E>,
    len: usize,
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for OrderedTree<E> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<E> fmt::Debug for OrderedTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<E> PartialEq for OrderedTree<E>
where
    E: Ord,
{
    /// Two trees are equal when they are [identical][OrderedTree::is_identical_to], i.e. they
    /// hold the same values in the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.is_identical_to(other)
    }
}

impl<E> Eq for OrderedTree<E> where E: Ord {}

impl<E> OrderedTree<E> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn root(&self) -> Option<&Node<E>> {
        self.root.as_deref()
    }

    /// Inserts the value into the tree as a new leaf. Returns `false`, dropping `value` and
    /// leaving the tree untouched, if an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert("b"));
    /// assert!(tree.insert("a"));
    /// assert!(!tree.insert("b"));
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: E) -> bool
    where
        E: Ord,
    {
        let slot = seek(&mut self.root, &value);
        if slot.is_some() {
            trace!("duplicate value rejected");
            return false;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        trace!(len = self.len, "value inserted");
        true
    }

    /// Whether an equal value is stored in the tree.
    pub fn contains(&self, value: &E) -> bool
    where
        E: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes the value equal to `value` from the tree. Returns `false` if there is no such
    /// value.
    ///
    /// A node with two children keeps its place in the tree: it takes the value of its in-order
    /// successor, and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.in_order(), [&1, &3, &4, &7, &8, &9]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, value: &E) -> bool
    where
        E: Ord,
    {
        let slot = seek(&mut self.root, value);
        let node = match slot {
            Some(node) => node,
            None => {
                trace!("value to remove not found");
                return false;
            }
        };

        match (node.left.is_some(), node.right.take()) {
            (true, Some(right)) => {
                let (successor, rest) = split_min(right);
                node.value = successor;
                node.right = rest;
                debug!("replaced removed value with its in-order successor");
            }
            (_, right) => {
                *slot = node.left.take().or(right);
                trace!("spliced out node with at most one child");
            }
        }

        self.len -= 1;
        true
    }

    /// Finds the parent of the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Parent};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.parent_of(&1), Parent::Node(&2));
    /// assert_eq!(tree.parent_of(&2), Parent::Root);
    /// assert_eq!(tree.parent_of(&3), Parent::Absent);
    /// assert_eq!(tree.parent_of(&3).value(), None);
    /// ```
    pub fn parent_of(&self, value: &E) -> Parent<'_, E>
    where
        E: Ord,
    {
        let mut parent: Option<&Node<E>> = None;
        let mut current = self.root();

        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => {
                    return parent.map_or(Parent::Root, |p| Parent::Node(&p.value));
                }
                Ordering::Greater => node.right.as_deref(),
            };
            parent = Some(node);
        }

        Parent::Absent
    }

    /// Every value below the node holding `value`: its left subtree in pre-order followed by its
    /// right subtree in pre-order. Empty if `value` is absent or stored in a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.descendants_of(&3), [&1, &4]);
    /// assert_eq!(tree.descendants_of(&5), [&3, &1, &4, &8, &7, &9]);
    /// assert!(tree.descendants_of(&9).is_empty());
    /// ```
    pub fn descendants_of(&self, value: &E) -> Vec<&E>
    where
        E: Ord,
    {
        let mut descendants = Vec::new();
        if let Some(node) = self.find(value) {
            for child in node.children() {
                traverse::pre_order(Some(child), &mut descendants);
            }
        }
        descendants
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree holds no values.
    pub fn max(&self) -> Result<&E, TreeError> {
        let mut current = self.root().ok_or(TreeError::Empty)?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Ok(&current.value)
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree holds no values.
    pub fn min(&self) -> Result<&E, TreeError> {
        let mut current = self.root().ok_or(TreeError::Empty)?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Ok(&current.value)
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with a single
    /// node has a height of 0 and an empty tree has a height of -1.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<E>> = self.root().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(|node| node.children()).collect();
        }

        height
    }

    /// The depth of the node holding `value`, where the root is at level 0.
    pub fn level_of(&self, value: &E) -> Option<usize>
    where
        E: Ord,
    {
        let mut level = 0;
        let mut current = self.root();

        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(level),
                Ordering::Greater => node.right.as_deref(),
            };
            level += 1;
        }

        None
    }

    /// Whether `other` has exactly the same shape as this tree with equal values in the same
    /// positions. Trees holding the same values built from different insertion orders are
    /// generally not identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut a = OrderedTree::new();
    /// let mut b = OrderedTree::new();
    /// for x in [2, 1, 3] {
    ///     a.insert(x);
    ///     b.insert(x);
    /// }
    /// assert!(a.is_identical_to(&b));
    ///
    /// let mut c = OrderedTree::new();
    /// for x in [1, 2, 3] {
    ///     c.insert(x);
    /// }
    /// assert!(!a.is_identical_to(&c));
    /// ```
    pub fn is_identical_to(&self, other: &OrderedTree<E>) -> bool
    where
        E: Ord,
    {
        let mut pending = vec![(self.root(), other.root())];

        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    pending.push((a.right.as_deref(), b.right.as_deref()));
                    pending.push((a.left.as_deref(), b.left.as_deref()));
                }
                (Some(_), None) | (None, Some(_)) => return false,
            }
        }

        true
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.count_nodes(Node::is_leaf)
    }

    /// The number of nodes with at least one child.
    pub fn internal_count(&self) -> usize {
        self.count_nodes(|node| !node.is_leaf())
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!(len = self.len, "clearing tree");
        }
        release(self.root.take());
        self.len = 0;
    }

    fn find(&self, value: &E) -> Option<&Node<E>>
    where
        E: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn count_nodes(&self, predicate: impl Fn(&Node<E>) -> bool) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<E>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            if predicate(node) {
                count += 1;
            }
            stack.extend(node.children());
        }

        count
    }
}

/// Walks down from `link` and returns the slot that holds `value`, or the empty slot where
/// `value` would be inserted.
fn seek<'a, E>(mut link: &'a mut Link<E>, value: &E) -> &'a mut Link<E>
where
    E: Ord,
{
    loop {
        let go_left = match link.as_deref() {
            Some(node) if *value < node.value => true,
            Some(node) if *value > node.value => false,
            _ => return link,
        };
        let node = link.as_mut().expect("Descending implies a node");
        link = if go_left {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Splits the smallest value off `subtree`. Returns that value and what remains of the subtree:
/// the minimum's node is unlinked and its right child takes its place.
fn split_min<E>(mut subtree: Box<Node<E>>) -> (E, Link<E>) {
    if subtree.left.is_none() {
        let Node { value, right, .. } = *subtree;
        return (value, right);
    }

    let mut parent = &mut subtree;
    while parent.left.as_ref().map_or(false, |left| left.left.is_some()) {
        parent = parent.left.as_mut().expect("Checked for a left child");
    }

    let min = parent.left.take().expect("Parent of the minimum has a left child");
    let Node { value, right, .. } = *min;
    parent.left = right;
    (value, Some(subtree))
}

/// Drops a subtree with an explicit stack so its depth is not bounded by the call stack.
fn release<E>(root: Link<E>) {
    let mut pending: Vec<Box<Node<E>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
