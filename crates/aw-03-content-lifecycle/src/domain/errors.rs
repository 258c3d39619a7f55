//! # Domain Errors
//!
//! Every public operation returns `LifecycleError`. Store failures are
//! re-wrapped with the name of the operation that hit them.

use aw_01_document_store::StoreError;
use aw_02_vote_engine::VoteError;
use shared_types::{Collection, DocumentId, Principal};
use thiserror::Error;

/// Errors that can occur during content lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// A required field was missing or empty.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced question, answer, tag or bounty does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: DocumentId },

    /// The caller lacks the required relationship to the content.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{voter} cannot vote on their own content")]
    SelfVoteForbidden { voter: Principal },

    #[error("Question {0} is closed")]
    QuestionClosed(DocumentId),

    #[error("Question {0} already has an accepted answer")]
    AlreadyAccepted(DocumentId),

    #[error("Answer {answer_id} does not belong to question {question_id}")]
    MismatchedParent {
        answer_id: DocumentId,
        question_id: DocumentId,
    },

    #[error("Bounty {0} is no longer active")]
    BountyInactive(DocumentId),

    /// The store could not be reached or returned unreadable data.
    #[error("{operation} failed: storage unavailable ({reason})")]
    StorageUnavailable {
        operation: &'static str,
        reason: String,
    },

    /// Another writer changed the document first (optimistic mode only).
    #[error("{operation} failed: {id} was modified concurrently, re-read and retry")]
    Conflict {
        operation: &'static str,
        id: DocumentId,
    },
}

impl LifecycleError {
    /// Re-wrap a store failure raised while running `operation`.
    pub fn store(operation: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { collection, id } => LifecycleError::NotFound {
                kind: record_kind(collection),
                id,
            },
            StoreError::Conflict { id, .. } => LifecycleError::Conflict { operation, id },
            StoreError::Unavailable { reason } => {
                LifecycleError::StorageUnavailable { operation, reason }
            }
            StoreError::Schema { .. } => LifecycleError::StorageUnavailable {
                operation,
                reason: err.to_string(),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        LifecycleError::Validation(message.into())
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LifecycleError::Conflict { .. } | LifecycleError::StorageUnavailable { .. }
        )
    }
}

impl From<VoteError> for LifecycleError {
    fn from(err: VoteError) -> Self {
        match err {
            VoteError::SelfVoteForbidden { voter } => LifecycleError::SelfVoteForbidden { voter },
        }
    }
}

pub(crate) fn record_kind(collection: Collection) -> &'static str {
    match collection {
        Collection::Questions => "Question",
        Collection::Answers => "Answer",
        Collection::Comments => "Comment",
        Collection::Tags => "Tag",
        Collection::Bounties => "Bounty",
        Collection::Proposals => "Proposal",
    }
}
