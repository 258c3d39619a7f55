//! # Question Feed Service

use crate::domain::config::FeedConfig;
use crate::domain::errors::FeedError;
use crate::domain::page::{paginate, PageRequest};
use crate::domain::sort::rank;
use crate::ports::inbound::QuestionFeedApi;
use async_trait::async_trait;
use aw_01_document_store::{DocumentStore, DocumentStoreExt};
use shared_types::{Answer, DocumentId, Question, Timestamp};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Read-only listing service over the shared document store.
pub struct QuestionFeedService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
    config: FeedConfig,
}

impl<S: DocumentStore + ?Sized> QuestionFeedService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, FeedConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: FeedConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Newest answer `createdAt` per question id, from one answers scan.
    async fn latest_answers(&self) -> Result<HashMap<DocumentId, Timestamp>, FeedError> {
        let answers: Vec<Answer> = self
            .store
            .find(&[])
            .await
            .map_err(|e| FeedError::store("get_questions", e))?;

        let mut latest: HashMap<DocumentId, Timestamp> = HashMap::new();
        for answer in answers {
            let entry = latest.entry(answer.question_id).or_insert(answer.created_at);
            *entry = (*entry).max(answer.created_at);
        }
        Ok(latest)
    }

    async fn ranked_page(
        &self,
        mut questions: Vec<Question>,
        page: PageRequest,
    ) -> Result<Vec<Question>, FeedError> {
        let latest = if page.sort.needs_activity() {
            self.latest_answers().await?
        } else {
            HashMap::new()
        };

        let total = questions.len();
        rank(&mut questions, page.sort, &latest);
        let limit = self.config.clamp_limit(page.limit);
        let result = paginate(questions, page.offset, limit);

        debug!(
            "[aw-04] {} questions sorted by {}, returning {} from offset {}",
            total,
            page.sort,
            result.len(),
            page.offset
        );
        Ok(result)
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> QuestionFeedApi for QuestionFeedService<S> {
    async fn get_questions(&self, page: PageRequest) -> Result<Vec<Question>, FeedError> {
        let questions: Vec<Question> = self
            .store
            .find(&[])
            .await
            .map_err(|e| FeedError::store("get_questions", e))?;
        self.ranked_page(questions, page).await
    }

    async fn get_questions_tagged(
        &self,
        tag: &str,
        page: PageRequest,
    ) -> Result<Vec<Question>, FeedError> {
        let tag = tag.trim();
        let questions: Vec<Question> = self
            .store
            .find::<Question>(&[])
            .await
            .map_err(|e| FeedError::store("get_questions_tagged", e))?
            .into_iter()
            .filter(|q| q.tags.iter().any(|t| t == tag))
            .collect();
        self.ranked_page(questions, page).await
    }
}
