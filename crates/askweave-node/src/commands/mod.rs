//! # CLI Commands
//!
//! Each subcommand maps onto one service operation and yields a JSON value
//! for the binary to print.

mod governance;

use anyhow::{Context, Result};
use aw_02_vote_engine::VoteDirection;
use aw_03_content_lifecycle::ContentLifecycleApi;
use aw_04_question_feed::{QuestionFeedApi, SortStrategy};
use clap::Subcommand;
use serde::Serialize;
use serde_json::{json, Value};
use shared_types::{ContentKind, Principal};

use crate::container::AskWeaveNode;

pub use governance::ProposalCommand;

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask a question
    Ask {
        title: String,
        content: String,
        /// Tag (repeat for several)
        #[arg(short, long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Answer a question
    Answer { question_id: String, content: String },

    /// Vote on a question or answer (voting the same way twice withdraws)
    Vote {
        /// question | answer
        kind: ContentKind,
        id: String,
        /// up | down
        direction: VoteDirection,
    },

    /// Accept an answer to your question
    Accept { question_id: String, answer_id: String },

    /// Show a question with its answers, bounty and comments
    Show { question_id: String },

    /// List questions
    List {
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long)]
        offset: Option<usize>,
        /// newest | active | bounty | hot
        #[arg(short, long)]
        sort: Option<SortStrategy>,
        /// Only questions carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List tags by usage
    Tags,

    /// Comment on a question or answer
    Comment {
        kind: ContentKind,
        parent_id: String,
        content: String,
    },

    /// Close your question to new answers
    Close { question_id: String },

    /// Bounties
    Bounty {
        #[command(subcommand)]
        command: BountyCommand,
    },

    /// DAO proposals
    Proposal {
        #[command(subcommand)]
        command: ProposalCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum BountyCommand {
    /// Put a bounty on a question
    Create { question_id: String, amount: u64 },
    /// Pay a bounty to the author of an answer
    Award { bounty_id: String, answer_id: String },
}

/// The principal a mutating command acts as.
pub(crate) fn actor(principal: Option<&Principal>) -> Result<&Principal> {
    principal.context("this command needs --as <principal>")
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("failed to encode result")
}

/// Run `command` against `node` on behalf of `principal`.
pub async fn execute(
    node: &AskWeaveNode,
    command: Command,
    principal: Option<&Principal>,
) -> Result<Value> {
    let lifecycle = &node.lifecycle;

    match command {
        Command::Ask {
            title,
            content,
            tags,
        } => {
            let id = lifecycle
                .ask_question(&title, &content, &tags, actor(principal)?)
                .await?;
            Ok(json!({ "questionId": id }))
        }
        Command::Answer {
            question_id,
            content,
        } => {
            let id = lifecycle
                .answer_question(&question_id, &content, actor(principal)?)
                .await?;
            Ok(json!({ "answerId": id }))
        }
        Command::Vote {
            kind,
            id,
            direction,
        } => {
            let outcome = lifecycle
                .vote_on_content(kind, &id, actor(principal)?, direction)
                .await?;
            to_json(&outcome)
        }
        Command::Accept {
            question_id,
            answer_id,
        } => {
            lifecycle
                .accept_answer(&question_id, &answer_id, actor(principal)?)
                .await?;
            Ok(json!({ "questionId": question_id, "acceptedAnswerId": answer_id }))
        }
        Command::Show { question_id } => to_json(&lifecycle.get_question(&question_id).await?),
        Command::List {
            limit,
            offset,
            sort,
            tag,
        } => {
            let page = node.feed.config().page_request(limit, offset, sort);
            let questions = match tag {
                Some(tag) => node.feed.get_questions_tagged(&tag, page).await?,
                None => node.feed.get_questions(page).await?,
            };
            to_json(&questions)
        }
        Command::Tags => to_json(&lifecycle.list_tags().await?),
        Command::Comment {
            kind,
            parent_id,
            content,
        } => {
            let id = lifecycle
                .add_comment(kind, &parent_id, &content, actor(principal)?)
                .await?;
            Ok(json!({ "commentId": id }))
        }
        Command::Close { question_id } => {
            lifecycle
                .close_question(&question_id, actor(principal)?)
                .await?;
            Ok(json!({ "questionId": question_id, "isClosed": true }))
        }
        Command::Bounty { command } => match command {
            BountyCommand::Create {
                question_id,
                amount,
            } => {
                let id = lifecycle
                    .create_bounty(&question_id, amount, actor(principal)?)
                    .await?;
                Ok(json!({ "bountyId": id }))
            }
            BountyCommand::Award {
                bounty_id,
                answer_id,
            } => {
                lifecycle
                    .award_bounty(&bounty_id, &answer_id, actor(principal)?)
                    .await?;
                Ok(json!({ "bountyId": bounty_id, "answerId": answer_id, "isActive": false }))
            }
        },
        Command::Proposal { command } => governance::execute(node, command, principal).await,
    }
}
