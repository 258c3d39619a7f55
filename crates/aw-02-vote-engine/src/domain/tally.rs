//! # Vote Tally
//!
//! Sets are stored as arrays on the content document and keep insertion
//! order; membership tests are linear, which is fine at per-item voter counts.

use crate::domain::direction::VoteDirection;
use crate::error::VoteError;
use serde::{Deserialize, Serialize};
use shared_types::Principal;

/// The up/down voter sets of one question or answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSets {
    pub upvotes: Vec<Principal>,
    pub downvotes: Vec<Principal>,
}

impl VoteSets {
    pub fn new(upvotes: Vec<Principal>, downvotes: Vec<Principal>) -> Self {
        Self { upvotes, downvotes }
    }

    /// The voter's current direction, if any.
    pub fn position(&self, voter: &Principal) -> Option<VoteDirection> {
        if self.upvotes.contains(voter) {
            Some(VoteDirection::Up)
        } else if self.downvotes.contains(voter) {
            Some(VoteDirection::Down)
        } else {
            None
        }
    }

    /// Net score implied by the sets alone.
    pub fn score(&self) -> i64 {
        self.upvotes.len() as i64 - self.downvotes.len() as i64
    }

    /// Apply one vote in place and return the change to `voteCount`.
    ///
    /// Voting the voter's current direction withdraws the vote; any other
    /// vote replaces it. The voter ends up in at most one set either way.
    pub fn apply(&mut self, voter: &Principal, direction: VoteDirection) -> i64 {
        let before = self.contribution(voter);
        let withdrawing = self.set(direction).contains(voter);

        self.upvotes.retain(|p| p != voter);
        self.downvotes.retain(|p| p != voter);
        if !withdrawing {
            self.set_mut(direction).push(voter.clone());
        }

        self.contribution(voter) - before
    }

    fn contribution(&self, voter: &Principal) -> i64 {
        let up = i64::from(self.upvotes.contains(voter));
        let down = i64::from(self.downvotes.contains(voter));
        up - down
    }

    fn set(&self, direction: VoteDirection) -> &Vec<Principal> {
        match direction {
            VoteDirection::Up => &self.upvotes,
            VoteDirection::Down => &self.downvotes,
        }
    }

    fn set_mut(&mut self, direction: VoteDirection) -> &mut Vec<Principal> {
        match direction {
            VoteDirection::Up => &mut self.upvotes,
            VoteDirection::Down => &mut self.downvotes,
        }
    }
}

/// New sets plus the `voteCount` change the caller must persist together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub upvotes: Vec<Principal>,
    pub downvotes: Vec<Principal>,
    pub delta: i64,
}

/// Compute the result of `voter` voting `direction` on content with the
/// given current sets.
pub fn vote(
    upvotes: &[Principal],
    downvotes: &[Principal],
    voter: &Principal,
    direction: VoteDirection,
) -> VoteOutcome {
    let mut sets = VoteSets::new(upvotes.to_vec(), downvotes.to_vec());
    let delta = sets.apply(voter, direction);
    VoteOutcome {
        upvotes: sets.upvotes,
        downvotes: sets.downvotes,
        delta,
    }
}

/// Reject a vote cast by the content's author.
pub fn ensure_not_author(author: &Principal, voter: &Principal) -> Result<(), VoteError> {
    if author == voter {
        return Err(VoteError::SelfVoteForbidden {
            voter: voter.clone(),
        });
    }
    Ok(())
}
