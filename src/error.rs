//! Errors reported by [`OrderedTree`][crate::OrderedTree].

/// Errors triggered by tree queries that need at least one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The query needs a value but the tree holds none.
    #[error("the tree is empty")]
    Empty,
}
