//! `ContentLifecycleApi` implementation.

use super::ContentLifecycleService;
use crate::domain::errors::LifecycleError;
use crate::domain::validation::{normalize_tags, require_text};
use crate::domain::views::{reconcile_acceptance, sort_answers, QuestionDetail};
use crate::ports::inbound::ContentLifecycleApi;
use async_trait::async_trait;
use aw_01_document_store::{DocumentStore, DocumentStoreExt, Patch, Predicate, StoreError};
use aw_02_vote_engine::{ensure_not_author, vote, VoteDirection, VoteOutcome};
use shared_types::{
    Answer, Bounty, Collection, Comment, ContentKind, DocumentId, Principal, Question, Tag,
};
use tracing::{debug, info, warn};

/// Vote-relevant fields of a question or answer.
struct VoteTarget {
    collection: Collection,
    author: Principal,
    upvotes: Vec<Principal>,
    downvotes: Vec<Principal>,
    vote_count: i64,
    version: u64,
}

impl From<Question> for VoteTarget {
    fn from(q: Question) -> Self {
        Self {
            collection: Collection::Questions,
            author: q.author,
            upvotes: q.upvotes,
            downvotes: q.downvotes,
            vote_count: q.vote_count,
            version: q.version,
        }
    }
}

impl From<Answer> for VoteTarget {
    fn from(a: Answer) -> Self {
        Self {
            collection: Collection::Answers,
            author: a.author,
            upvotes: a.upvotes,
            downvotes: a.downvotes,
            vote_count: a.vote_count,
            version: a.version,
        }
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> ContentLifecycleApi for ContentLifecycleService<S> {
    async fn ask_question(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
        author: &Principal,
    ) -> Result<DocumentId, LifecycleError> {
        const OP: &str = "ask_question";

        let title = require_text("title", title)?;
        let content = require_text("content", content)?;
        let tags = normalize_tags(tags)?;

        let question = Question::new(title, content, tags.clone(), author.clone());
        let id = self.create(OP, question).await?;

        for tag in &tags {
            if let Err(e) = self.bump_tag(tag).await {
                warn!("[aw-03] Tag count for '{}' not updated: {}", tag, e);
            }
        }

        info!("[aw-03] Question {} asked by {} [{}]", id, author, tags.join(", "));
        Ok(id)
    }

    async fn answer_question(
        &self,
        question_id: &str,
        content: &str,
        author: &Principal,
    ) -> Result<DocumentId, LifecycleError> {
        const OP: &str = "answer_question";

        let content = require_text("content", content)?;
        let question = self.load_question(OP, question_id).await?;
        if question.is_closed {
            return Err(LifecycleError::QuestionClosed(question_id.to_string()));
        }

        let answer_id = self
            .create(OP, Answer::new(question_id, content, author.clone()))
            .await?;

        let mut answer_ids = question.answer_ids;
        answer_ids.push(answer_id.clone());
        if let Err(e) = self
            .write::<Question>(
                OP,
                question_id,
                question.version,
                Patch::new().set("answerIds", answer_ids),
            )
            .await
        {
            self.discard::<Answer>(&answer_id).await;
            return Err(e);
        }

        info!("[aw-03] Answer {} posted to {} by {}", answer_id, question_id, author);
        Ok(answer_id)
    }

    async fn vote_on_content(
        &self,
        kind: ContentKind,
        content_id: &str,
        voter: &Principal,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, LifecycleError> {
        const OP: &str = "vote_on_content";

        let target: VoteTarget = match kind {
            ContentKind::Question => self.load_question(OP, content_id).await?.into(),
            ContentKind::Answer => self.load_answer(OP, content_id).await?.into(),
        };
        ensure_not_author(&target.author, voter)?;

        let outcome = vote(&target.upvotes, &target.downvotes, voter, direction);
        let patch = Patch::new()
            .set("upvotes", outcome.upvotes.clone())
            .set("downvotes", outcome.downvotes.clone())
            .set("voteCount", target.vote_count + outcome.delta);

        self.store
            .update(
                target.collection,
                content_id,
                patch,
                self.config.expected_version(target.version),
            )
            .await
            .map_err(|e| LifecycleError::store(OP, e))?;

        debug!(
            "[aw-03] {} voted {} on {} {} (delta {:+})",
            voter, direction, kind, content_id, outcome.delta
        );
        Ok(outcome)
    }

    async fn accept_answer(
        &self,
        question_id: &str,
        answer_id: &str,
        caller: &Principal,
    ) -> Result<(), LifecycleError> {
        const OP: &str = "accept_answer";

        let question = self.load_question(OP, question_id).await?;
        if question.author != *caller {
            return Err(LifecycleError::Forbidden(
                "only the question author can accept an answer".into(),
            ));
        }
        if question.is_accepted || question.accepted_answer_id.is_some() {
            return Err(LifecycleError::AlreadyAccepted(question_id.to_string()));
        }

        let answer = self.load_answer(OP, answer_id).await?;
        if answer.question_id != question_id {
            return Err(LifecycleError::MismatchedParent {
                answer_id: answer_id.to_string(),
                question_id: question_id.to_string(),
            });
        }

        // Question first: it is the source of truth if the second write fails.
        self.write::<Question>(
            OP,
            question_id,
            question.version,
            Patch::new()
                .set("isAccepted", true)
                .set("acceptedAnswerId", answer_id),
        )
        .await?;
        self.write::<Answer>(
            OP,
            answer_id,
            answer.version,
            Patch::new().set("isAccepted", true),
        )
        .await?;

        info!("[aw-03] Answer {} accepted on {}", answer_id, question_id);
        Ok(())
    }

    async fn get_question(&self, question_id: &str) -> Result<QuestionDetail, LifecycleError> {
        const OP: &str = "get_question";

        let question = self.load_question(OP, question_id).await?;
        self.write::<Question>(
            OP,
            question_id,
            question.version,
            Patch::new().set("viewCount", question.view_count + 1),
        )
        .await?;
        let question = self.load_question(OP, question_id).await?;

        let mut answers: Vec<Answer> = self
            .store
            .find(&[Predicate::eq("questionId", question_id)])
            .await
            .map_err(|e| LifecycleError::store(OP, e))?;
        reconcile_acceptance(&question, &mut answers);
        sort_answers(&mut answers);

        let bounty = match &question.bounty_id {
            Some(bounty_id) => match self.store.fetch::<Bounty>(bounty_id).await {
                Ok(bounty) => Some(bounty),
                Err(StoreError::NotFound { .. }) => {
                    warn!("[aw-03] Question {} references missing bounty {}", question_id, bounty_id);
                    None
                }
                Err(e) => return Err(LifecycleError::store(OP, e)),
            },
            None => None,
        };

        let mut comments: Vec<Comment> = self
            .store
            .find::<Comment>(&[])
            .await
            .map_err(|e| LifecycleError::store(OP, e))?
            .into_iter()
            .filter(|c| c.parent_id == question_id || answers.iter().any(|a| a.id == c.parent_id))
            .collect();
        comments.sort_by_key(|c| c.created_at);

        Ok(QuestionDetail {
            question,
            answers,
            bounty,
            comments,
        })
    }

    async fn close_question(
        &self,
        question_id: &str,
        caller: &Principal,
    ) -> Result<(), LifecycleError> {
        const OP: &str = "close_question";

        let question = self.load_question(OP, question_id).await?;
        if question.author != *caller {
            return Err(LifecycleError::Forbidden(
                "only the question author can close it".into(),
            ));
        }
        if question.is_closed {
            return Ok(());
        }

        self.write::<Question>(
            OP,
            question_id,
            question.version,
            Patch::new().set("isClosed", true),
        )
        .await?;

        info!("[aw-03] Question {} closed", question_id);
        Ok(())
    }

    async fn add_comment(
        &self,
        kind: ContentKind,
        parent_id: &str,
        content: &str,
        author: &Principal,
    ) -> Result<DocumentId, LifecycleError> {
        const OP: &str = "add_comment";

        let content = require_text("content", content)?;
        let (collection, mut comment_ids, version) = match kind {
            ContentKind::Question => {
                let q = self.load_question(OP, parent_id).await?;
                (Collection::Questions, q.comment_ids, q.version)
            }
            ContentKind::Answer => {
                let a = self.load_answer(OP, parent_id).await?;
                (Collection::Answers, a.comment_ids, a.version)
            }
        };

        let comment_id = self
            .create(OP, Comment::new(kind, parent_id, content, author.clone()))
            .await?;

        comment_ids.push(comment_id.clone());
        if let Err(e) = self
            .store
            .update(
                collection,
                parent_id,
                Patch::new().set("commentIds", comment_ids),
                self.config.expected_version(version),
            )
            .await
        {
            self.discard::<Comment>(&comment_id).await;
            return Err(LifecycleError::store(OP, e));
        }

        debug!("[aw-03] Comment {} on {} {}", comment_id, kind, parent_id);
        Ok(comment_id)
    }

    async fn create_bounty(
        &self,
        question_id: &str,
        amount: u64,
        sponsor: &Principal,
    ) -> Result<DocumentId, LifecycleError> {
        const OP: &str = "create_bounty";

        if amount == 0 {
            return Err(LifecycleError::validation("bounty amount must be greater than 0"));
        }
        let question = self.load_question(OP, question_id).await?;
        let total = question
            .bounty_amount
            .checked_add(amount)
            .ok_or_else(|| LifecycleError::validation("bounty total overflows"))?;

        let bounty_id = self
            .create(OP, Bounty::new(question_id, sponsor.clone(), amount))
            .await?;

        if let Err(e) = self
            .write::<Question>(
                OP,
                question_id,
                question.version,
                Patch::new()
                    .set("bountyAmount", total)
                    .set("bountyId", bounty_id.clone()),
            )
            .await
        {
            self.discard::<Bounty>(&bounty_id).await;
            return Err(e);
        }

        info!(
            "[aw-03] Bounty {} of {} on {} by {}",
            bounty_id, amount, question_id, sponsor
        );
        Ok(bounty_id)
    }

    async fn award_bounty(
        &self,
        bounty_id: &str,
        answer_id: &str,
        caller: &Principal,
    ) -> Result<(), LifecycleError> {
        const OP: &str = "award_bounty";

        let bounty = self.load_bounty(OP, bounty_id).await?;
        if !bounty.is_active {
            return Err(LifecycleError::BountyInactive(bounty_id.to_string()));
        }
        if bounty.sponsor != *caller {
            return Err(LifecycleError::Forbidden(
                "only the bounty sponsor can award it".into(),
            ));
        }

        let answer = self.load_answer(OP, answer_id).await?;
        if answer.question_id != bounty.question_id {
            return Err(LifecycleError::MismatchedParent {
                answer_id: answer_id.to_string(),
                question_id: bounty.question_id,
            });
        }

        self.write::<Bounty>(
            OP,
            bounty_id,
            bounty.version,
            Patch::new()
                .set("isActive", false)
                .set("isPaid", true)
                .set("paidTo", answer.author.clone()),
        )
        .await?;

        info!(
            "[aw-03] Bounty {} ({}) paid to {}",
            bounty_id, bounty.amount, answer.author
        );
        Ok(())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, LifecycleError> {
        let mut tags: Vec<Tag> = self
            .store
            .find(&[])
            .await
            .map_err(|e| LifecycleError::store("list_tags", e))?;
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        Ok(tags)
    }
}
