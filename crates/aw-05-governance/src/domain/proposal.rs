//! Proposal state transitions, free of I/O.

use crate::domain::errors::GovernanceError;
use shared_types::{Principal, Proposal, ProposalStatus, Timestamp};

/// Check that `voter` may still vote on `proposal` at `now`.
pub fn ensure_can_vote(
    proposal: &Proposal,
    voter: &Principal,
    now: Timestamp,
) -> Result<(), GovernanceError> {
    if proposal.status != ProposalStatus::Open {
        return Err(GovernanceError::ProposalNotOpen {
            id: proposal.id.clone(),
            status: proposal.status,
        });
    }
    if now > proposal.vote_end_timestamp {
        return Err(GovernanceError::VotingEnded(proposal.id.clone()));
    }
    if proposal.voter_addresses.contains(voter) {
        return Err(GovernanceError::AlreadyVoted {
            id: proposal.id.clone(),
            voter: voter.clone(),
        });
    }
    Ok(())
}

/// Check that `proposal` is open and its window has passed.
pub fn ensure_can_finalize(proposal: &Proposal, now: Timestamp) -> Result<(), GovernanceError> {
    if proposal.status != ProposalStatus::Open {
        return Err(GovernanceError::ProposalNotOpen {
            id: proposal.id.clone(),
            status: proposal.status,
        });
    }
    if now <= proposal.vote_end_timestamp {
        return Err(GovernanceError::VotingInProgress {
            id: proposal.id.clone(),
            ends_at: proposal.vote_end_timestamp,
        });
    }
    Ok(())
}

/// Final status of a closed vote.
///
/// Below quorum is a rejection regardless of the split; a tie is a rejection.
pub fn settle(votes_for: u64, votes_against: u64, minimum_quorum: u64) -> ProposalStatus {
    let total = votes_for.saturating_add(votes_against);
    if total >= minimum_quorum && votes_for > votes_against {
        ProposalStatus::Approved
    } else {
        ProposalStatus::Rejected
    }
}
