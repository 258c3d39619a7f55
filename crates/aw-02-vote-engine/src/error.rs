//! Error types for the Vote Engine subsystem

use shared_types::Principal;
use thiserror::Error;

/// Errors that can occur while voting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("{voter} cannot vote on their own content")]
    SelfVoteForbidden { voter: Principal },
}
