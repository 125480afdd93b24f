//! Errors reported by [`Tree`][crate::Tree] operations.

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a tree operation can fail.
///
/// Most "nothing there" outcomes are plain `None`s (see [`Tree::find`][crate::Tree::find]).
/// Only [`Tree::remove`][crate::Tree::remove] treats a missing item as an error because the
/// caller asked for something to be taken out that was never put in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested item isn't stored in the tree.
    #[error("item not in tree")]
    NotFound,
}
