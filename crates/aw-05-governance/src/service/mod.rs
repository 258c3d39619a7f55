//! # Governance Service


use crate::domain::config::GovernanceConfig;
use crate::domain::errors::GovernanceError;
use crate::domain::proposal::{ensure_can_finalize, ensure_can_vote, settle};
use crate::ports::inbound::GovernanceApi;
use async_trait::async_trait;
use aw_01_document_store::{DocumentStore, DocumentStoreExt, Patch};
use shared_types::{
    DocumentId, Principal, Proposal, ProposalKind, ProposalStatus, SystemTimeSource, TimeSource,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct GovernanceService<S: DocumentStore + ?Sized, TS: TimeSource = SystemTimeSource> {
    store: Arc<S>,
    time_source: TS,
    config: GovernanceConfig,
}

impl<S: DocumentStore + ?Sized> GovernanceService<S, SystemTimeSource> {
    pub fn new(store: Arc<S>, config: GovernanceConfig) -> Self {
        Self::with_clock(store, SystemTimeSource, config)
    }
}

impl<S: DocumentStore + ?Sized, TS: TimeSource> GovernanceService<S, TS> {
    pub fn with_clock(store: Arc<S>, time_source: TS, config: GovernanceConfig) -> Self {
        Self {
            store,
            time_source,
            config,
        }
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    async fn load(&self, operation: &'static str, id: &str) -> Result<Proposal, GovernanceError> {
        self.store
            .fetch::<Proposal>(id)
            .await
            .map_err(|e| GovernanceError::store(operation, e))
    }

    /// Compare-and-swap write against the version that was read.
    async fn write(
        &self,
        operation: &'static str,
        proposal: &Proposal,
        patch: Patch,
    ) -> Result<(), GovernanceError> {
        self.store
            .patch::<Proposal>(&proposal.id, patch, Some(proposal.version))
            .await
            .map(|_| ())
            .map_err(|e| GovernanceError::store(operation, e))
    }
}

fn require_text(field: &str, value: &str) -> Result<String, GovernanceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GovernanceError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl<S: DocumentStore + ?Sized, TS: TimeSource> GovernanceApi for GovernanceService<S, TS> {
    async fn create_proposal(
        &self,
        title: &str,
        description: &str,
        kind: ProposalKind,
        proposer: &Principal,
    ) -> Result<DocumentId, GovernanceError> {
        const OP: &str = "create_proposal";

        let title = require_text("title", title)?;
        let description = require_text("description", description)?;
        let vote_end = self
            .time_source
            .now()
            .saturating_add(self.config.voting_period_ms);

        let proposal = Proposal::new(title, description, proposer.clone(), kind, vote_end);
        let id = self
            .store
            .insert(proposal)
            .await
            .map_err(|e| GovernanceError::store(OP, e))?;

        info!(
            "[aw-05] Proposal {} ({}) opened by {}, voting ends at {}",
            id, kind, proposer, vote_end
        );
        Ok(id)
    }

    async fn vote_on_proposal(
        &self,
        proposal_id: &str,
        voter: &Principal,
        support: bool,
    ) -> Result<(), GovernanceError> {
        const OP: &str = "vote_on_proposal";

        let proposal = self.load(OP, proposal_id).await?;
        ensure_can_vote(&proposal, voter, self.time_source.now())?;

        let mut voters = proposal.voter_addresses.clone();
        voters.push(voter.clone());
        let patch = if support {
            Patch::new().set("votesFor", proposal.votes_for.saturating_add(1))
        } else {
            Patch::new().set("votesAgainst", proposal.votes_against.saturating_add(1))
        };
        self.write(OP, &proposal, patch.set("voterAddresses", voters))
            .await?;

        debug!(
            "[aw-05] {} voted {} proposal {}",
            voter,
            if support { "for" } else { "against" },
            proposal_id
        );
        Ok(())
    }

    async fn finalize_proposal(&self, proposal_id: &str) -> Result<Proposal, GovernanceError> {
        const OP: &str = "finalize_proposal";

        let proposal = self.load(OP, proposal_id).await?;
        ensure_can_finalize(&proposal, self.time_source.now())?;

        let status = settle(
            proposal.votes_for,
            proposal.votes_against,
            self.config.minimum_quorum,
        );
        self.write(OP, &proposal, Patch::new().set("status", status.to_string()))
            .await?;

        info!(
            "[aw-05] Proposal {} {} ({} for, {} against, quorum {})",
            proposal_id,
            status,
            proposal.votes_for,
            proposal.votes_against,
            self.config.minimum_quorum
        );
        self.load(OP, proposal_id).await
    }

    async fn implement_proposal(
        &self,
        proposal_id: &str,
        caller: &Principal,
    ) -> Result<(), GovernanceError> {
        const OP: &str = "implement_proposal";

        if !self.config.is_owner(caller) {
            return Err(GovernanceError::Forbidden(format!(
                "{caller} is not the governance owner"
            )));
        }

        let proposal = self.load(OP, proposal_id).await?;
        if proposal.status != ProposalStatus::Approved {
            return Err(GovernanceError::NotApproved {
                id: proposal.id,
                status: proposal.status,
            });
        }

        self.write(
            OP,
            &proposal,
            Patch::new().set("status", ProposalStatus::Implemented.to_string()),
        )
        .await?;

        info!("[aw-05] Proposal {} implemented by {}", proposal_id, caller);
        Ok(())
    }

    async fn get_proposal(&self, proposal_id: &str) -> Result<Proposal, GovernanceError> {
        self.load("get_proposal", proposal_id).await
    }

    async fn list_proposals(&self) -> Result<Vec<Proposal>, GovernanceError> {
        self.store
            .find::<Proposal>(&[])
            .await
            .map_err(|e| GovernanceError::store("list_proposals", e))
    }
}
