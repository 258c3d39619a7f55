//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::{DocumentId, Principal, Proposal, ProposalKind};

use crate::domain::errors::GovernanceError;

/// DAO governance API (Driving Port)
#[async_trait]
pub trait GovernanceApi: Send + Sync {
    /// Open a proposal; voting ends one voting period from now.
    async fn create_proposal(
        &self,
        title: &str,
        description: &str,
        kind: ProposalKind,
        proposer: &Principal,
    ) -> Result<DocumentId, GovernanceError>;

    /// Cast one vote for (`support == true`) or against.
    async fn vote_on_proposal(
        &self,
        proposal_id: &str,
        voter: &Principal,
        support: bool,
    ) -> Result<(), GovernanceError>;

    /// Settle an open proposal whose voting window has passed.
    async fn finalize_proposal(&self, proposal_id: &str) -> Result<Proposal, GovernanceError>;

    async fn implement_proposal(
        &self,
        proposal_id: &str,
        caller: &Principal,
    ) -> Result<(), GovernanceError>;

    async fn get_proposal(&self, proposal_id: &str) -> Result<Proposal, GovernanceError>;

    /// Every proposal, newest first.
    async fn list_proposals(&self) -> Result<Vec<Proposal>, GovernanceError>;
}
