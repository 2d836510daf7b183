use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("[Tree] The tree is empty and has no root node!")]
    EmptyTree,

    #[error("[Tree] Child index {index} is out of range for a node with {count} children!")]
    ChildOutOfRange { index: usize, count: usize },

    #[error("[Tree] Node index {index} is out of range for a tree with {count} nodes!")]
    NodeOutOfRange { index: usize, count: usize },

    #[error("[Tree] Node reference with path {path:?} points to an erased node!")]
    StaleNodeRef { path: Vec<usize> },

    #[error("[Tree] Deserialized tree has invalid root element!")]
    InvalidRoot,

    #[error(
        "[Tree] Deserialized tree contains forward indexes which could imply cyclic references!"
    )]
    MaybeCyclic,
}

impl Error {
    pub(crate) fn stale(path: &[usize]) -> Self {
        Self::StaleNodeRef { path: path.to_vec() }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Unwraps the result of a precondition check, turning a violated
/// precondition into a panic carrying the error's message.
#[track_caller]
pub(crate) fn contract<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|error| panic!("{error}"))
}
