//! Tree-level errors

use thiserror::Error;

use crate::domain::node::NodeId;

/// Errors raised by tree mutation, child lookup and cursor operations.
///
/// Nothing is recovered internally: every failure is returned to the
/// immediate caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("child index {index} out of range for node with {len} children")]
    ChildOutOfRange { index: usize, len: usize },

    #[error("cannot advance cursor past end")]
    CursorAtEnd,

    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("cursor was created for a different tree")]
    ForeignCursor,

    #[error("the root node cannot be moved")]
    CannotMoveRoot,

    #[error("cannot graft {node:?} below its own descendant {parent:?}")]
    CyclicGraft { node: NodeId, parent: NodeId },
}

impl TreeError {
    /// True for the out-of-range family: bad child index, stale cursor path,
    /// or a cursor advanced past its end.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            TreeError::ChildOutOfRange { .. } | TreeError::CursorAtEnd
        )
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
