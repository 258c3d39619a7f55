//! Error types for the Question Feed subsystem

use aw_01_document_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{operation} failed: storage unavailable ({reason})")]
    StorageUnavailable {
        operation: &'static str,
        reason: String,
    },
}

impl FeedError {
    pub fn store(operation: &'static str, err: StoreError) -> Self {
        let reason = match err {
            StoreError::Unavailable { reason } => reason,
            other => other.to_string(),
        };
        FeedError::StorageUnavailable { operation, reason }
    }
}
