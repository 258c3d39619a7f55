//! Governance configuration

use crate::domain::errors::GovernanceError;
use serde::{Deserialize, Serialize};
use shared_types::Principal;

/// Seven days in milliseconds.
pub const DEFAULT_VOTING_PERIOD_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// Votes needed before a proposal can be approved.
pub const DEFAULT_MINIMUM_QUORUM: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceConfig {
    /// The only principal allowed to implement proposals. `None` disables
    /// implementation entirely.
    pub owner: Option<Principal>,
    pub voting_period_ms: u64,
    pub minimum_quorum: u64,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            owner: None,
            voting_period_ms: DEFAULT_VOTING_PERIOD_MS,
            minimum_quorum: DEFAULT_MINIMUM_QUORUM,
        }
    }
}

impl GovernanceConfig {
    pub fn with_owner(mut self, owner: Principal) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn validate(&self) -> Result<(), GovernanceError> {
        if self.voting_period_ms == 0 {
            return Err(GovernanceError::validation("voting period must be positive"));
        }
        Ok(())
    }

    pub fn is_owner(&self, caller: &Principal) -> bool {
        self.owner.as_ref() == Some(caller)
    }
}
