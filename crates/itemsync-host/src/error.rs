//! Error types for itemsync-host

use crate::id::{ColumnHandle, ItemId, ProjectId, ViewId};

/// Result type for host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a host can raise while servicing engine calls
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Project id is not known to the host
    #[error("Unknown project: {id}")]
    UnknownProject { id: ProjectId },

    /// View id is not known to the host
    #[error("Unknown view: {id}")]
    UnknownView { id: ViewId },

    /// Item id is not known to the host
    #[error("Unknown item: {id}")]
    UnknownItem { id: ItemId },

    /// Column handle is not bound in the addressed view
    #[error("Unknown column handle: {id}")]
    UnknownColumn { id: ColumnHandle },

    /// The host refused a write (type mismatch, unknown choice, ...)
    #[error("Value rejected: {reason}")]
    ValueRejected { reason: String },

    /// A stored representation could not be interpreted
    #[error("Malformed value: {reason}")]
    MalformedValue { reason: String },
}

impl Error {
    /// Build a [`Error::ValueRejected`] with the given reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::ValueRejected {
            reason: reason.into(),
        }
    }

    /// Build a [`Error::MalformedValue`] with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            reason: reason.into(),
        }
    }
}
