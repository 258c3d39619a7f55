//! # Domain Errors
//!
//! Error types for the Document Store subsystem.

use shared_types::{Collection, DocumentId};
use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No document with this id exists in the collection.
    #[error("Document {id} not found in collection {collection}")]
    NotFound {
        collection: Collection,
        id: DocumentId,
    },

    /// No persistence backend is reachable (not initialized, closed, or I/O failure).
    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// The stored version did not match the caller's expected version (INVARIANT-5).
    #[error("Version conflict on {collection}/{id}: expected {expected}, found {actual}")]
    Conflict {
        collection: Collection,
        id: DocumentId,
        expected: u64,
        actual: u64,
    },

    /// A document did not match its collection's schema (INVARIANT-2).
    #[error("Schema violation in collection {collection}: {message}")]
    Schema {
        collection: Collection,
        message: String,
    },
}

impl StoreError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            reason: reason.into(),
        }
    }

    pub(crate) fn schema(collection: Collection, message: impl Into<String>) -> Self {
        StoreError::Schema {
            collection,
            message: message.into(),
        }
    }

    /// True for errors a caller may resolve by re-reading and retrying.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::unavailable(err.to_string())
    }
}
