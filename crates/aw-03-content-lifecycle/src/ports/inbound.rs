//! Inbound Ports (Driving Ports)
//!
//! The operation surface the presentation layer (CLI, UI) calls. Callers
//! pass an already-authenticated `Principal`; the lifecycle never inspects it
//! beyond equality.

use async_trait::async_trait;
use aw_02_vote_engine::{VoteDirection, VoteOutcome};
use shared_types::{ContentKind, DocumentId, Principal, Tag};

use crate::domain::errors::LifecycleError;
use crate::domain::views::QuestionDetail;

/// Primary Content Lifecycle API (Driving Port)
#[async_trait]
pub trait ContentLifecycleApi: Send + Sync {
    /// Post a question and bump the usage count of each of its tags.
    ///
    /// # Errors
    /// `Validation` when title or content is blank or no tag is given.
    async fn ask_question(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
        author: &Principal,
    ) -> Result<DocumentId, LifecycleError>;

    /// Post an answer and append it to the question's `answerIds`.
    ///
    /// # Errors
    /// `Validation`, `NotFound`, `QuestionClosed`.
    async fn answer_question(
        &self,
        question_id: &str,
        content: &str,
        author: &Principal,
    ) -> Result<DocumentId, LifecycleError>;

    /// Toggle/switch a vote on a question or answer.
    ///
    /// # Errors
    /// `NotFound`, `SelfVoteForbidden` (nothing written).
    async fn vote_on_content(
        &self,
        kind: ContentKind,
        content_id: &str,
        voter: &Principal,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, LifecycleError>;

    /// Mark an answer as the accepted one.
    ///
    /// Checks run in this order: question exists, caller is its author, no
    /// answer accepted yet, answer exists, answer belongs to the question.
    async fn accept_answer(
        &self,
        question_id: &str,
        answer_id: &str,
        caller: &Principal,
    ) -> Result<(), LifecycleError>;

    /// Load a question page. Every call counts one view.
    async fn get_question(&self, question_id: &str) -> Result<QuestionDetail, LifecycleError>;

    /// Stop accepting answers. Author only; closing twice is a no-op.
    async fn close_question(&self, question_id: &str, caller: &Principal)
        -> Result<(), LifecycleError>;

    /// Comment on a question or answer.
    async fn add_comment(
        &self,
        kind: ContentKind,
        parent_id: &str,
        content: &str,
        author: &Principal,
    ) -> Result<DocumentId, LifecycleError>;

    /// Put a bounty of `amount` base units on a question.
    async fn create_bounty(
        &self,
        question_id: &str,
        amount: u64,
        sponsor: &Principal,
    ) -> Result<DocumentId, LifecycleError>;

    /// Pay an active bounty to the author of `answer_id`. Sponsor only.
    async fn award_bounty(
        &self,
        bounty_id: &str,
        answer_id: &str,
        caller: &Principal,
    ) -> Result<(), LifecycleError>;

    /// All tags, most used first, ties by name.
    async fn list_tags(&self) -> Result<Vec<Tag>, LifecycleError>;
}
