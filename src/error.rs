use thiserror::Error;

/// Errors reported by [`Tree`](crate::tree::Tree) operations that have nothing to report on
/// an empty tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree has no nodes.
    #[error("tree is empty")]
    Empty,
}
