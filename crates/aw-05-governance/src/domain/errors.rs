//! # Domain Errors

use aw_01_document_store::StoreError;
use shared_types::{DocumentId, Principal, ProposalStatus};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernanceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Proposal {0} not found")]
    NotFound(DocumentId),

    #[error("Proposal {id} is {status}, not open")]
    ProposalNotOpen {
        id: DocumentId,
        status: ProposalStatus,
    },

    #[error("Voting on proposal {0} has ended")]
    VotingEnded(DocumentId),

    #[error("Voting on proposal {id} is still open until {ends_at}")]
    VotingInProgress { id: DocumentId, ends_at: u64 },

    #[error("{voter} already voted on proposal {id}")]
    AlreadyVoted { id: DocumentId, voter: Principal },

    #[error("Proposal {id} is {status}, only approved proposals can be implemented")]
    NotApproved {
        id: DocumentId,
        status: ProposalStatus,
    },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{operation} failed: storage unavailable ({reason})")]
    StorageUnavailable {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} failed: {id} was modified concurrently, re-read and retry")]
    Conflict {
        operation: &'static str,
        id: DocumentId,
    },
}

impl GovernanceError {
    /// Re-wrap a store failure raised while running `operation`.
    pub fn store(operation: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => GovernanceError::NotFound(id),
            StoreError::Conflict { id, .. } => GovernanceError::Conflict { operation, id },
            StoreError::Unavailable { reason } => {
                GovernanceError::StorageUnavailable { operation, reason }
            }
            StoreError::Schema { .. } => GovernanceError::StorageUnavailable {
                operation,
                reason: err.to_string(),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        GovernanceError::Validation(message.into())
    }
}
