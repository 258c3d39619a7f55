//! `askweave proposal ...`

use anyhow::Result;
use aw_05_governance::GovernanceApi;
use clap::Subcommand;
use serde_json::{json, Value};
use shared_types::{Principal, ProposalKind};

use super::{actor, to_json};
use crate::container::AskWeaveNode;

#[derive(Debug, Subcommand)]
pub enum ProposalCommand {
    /// Open a proposal for voting
    Create {
        title: String,
        description: String,
        /// feature | parameter | bounty | other
        #[arg(short, long, default_value = "other")]
        kind: ProposalKind,
    },
    /// Vote for a proposal (or against with --against)
    Vote {
        proposal_id: String,
        #[arg(long)]
        against: bool,
    },
    /// Settle a proposal whose voting window has passed
    Finalize { proposal_id: String },
    /// Mark an approved proposal implemented (owner only)
    Implement { proposal_id: String },
    /// Show one proposal
    Show { proposal_id: String },
    /// List proposals, newest first
    List,
}

pub(super) async fn execute(
    node: &AskWeaveNode,
    command: ProposalCommand,
    principal: Option<&Principal>,
) -> Result<Value> {
    let governance = &node.governance;

    match command {
        ProposalCommand::Create {
            title,
            description,
            kind,
        } => {
            let id = governance
                .create_proposal(&title, &description, kind, actor(principal)?)
                .await?;
            Ok(json!({ "proposalId": id }))
        }
        ProposalCommand::Vote {
            proposal_id,
            against,
        } => {
            governance
                .vote_on_proposal(&proposal_id, actor(principal)?, !against)
                .await?;
            to_json(&governance.get_proposal(&proposal_id).await?)
        }
        ProposalCommand::Finalize { proposal_id } => {
            to_json(&governance.finalize_proposal(&proposal_id).await?)
        }
        ProposalCommand::Implement { proposal_id } => {
            governance
                .implement_proposal(&proposal_id, actor(principal)?)
                .await?;
            to_json(&governance.get_proposal(&proposal_id).await?)
        }
        ProposalCommand::Show { proposal_id } => {
            to_json(&governance.get_proposal(&proposal_id).await?)
        }
        ProposalCommand::List => to_json(&governance.list_proposals().await?),
    }
}
