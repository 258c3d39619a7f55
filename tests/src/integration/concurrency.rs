//! # Concurrent Writers
//!
//! Read-modify-write operations racing on one question. `YieldingStore`
//! suspends before every store call, so `join_all` interleaves the racers
//! step by step: every racer reads before anyone writes.
//!
//! - Last-write-wins: every call succeeds and all but one update is lost.
//! - Optimistic: exactly one call succeeds, the rest get `Conflict` and
//!   leave nothing stored.

use async_trait::async_trait;
use aw_01_document_store::{DocumentStore, Patch, Predicate, StoreError};
use shared_types::{Collection, Document, DocumentId};

/// Store wrapper that yields to the scheduler before delegating.
pub struct YieldingStore<S> {
    inner: S,
}

impl<S: DocumentStore> YieldingStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for YieldingStore<S> {
    async fn initialize(&self) -> Result<(), StoreError> {
        self.inner.initialize().await
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.inner.close().await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document, StoreError> {
        tokio::task::yield_now().await;
        self.inner.get(collection, id).await
    }

    async fn add(&self, document: Document) -> Result<DocumentId, StoreError> {
        tokio::task::yield_now().await;
        self.inner.add(document).await
    }

    async fn set(&self, id: &str, document: Document) -> Result<DocumentId, StoreError> {
        tokio::task::yield_now().await;
        self.inner.set(id, document).await
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Patch,
        expected_version: Option<u64>,
    ) -> Result<DocumentId, StoreError> {
        tokio::task::yield_now().await;
        self.inner.update(collection, id, patch, expected_version).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        tokio::task::yield_now().await;
        self.inner.delete(collection, id).await
    }

    async fn query(
        &self,
        collection: Collection,
        predicates: &[Predicate],
    ) -> Result<Vec<Document>, StoreError> {
        tokio::task::yield_now().await;
        self.inner.query(collection, predicates).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_01_document_store::{DocumentStoreExt, InMemoryDocumentStore, SequentialIdGenerator};
    use aw_02_vote_engine::VoteDirection;
    use aw_03_content_lifecycle::{
        ConcurrencyMode, ContentLifecycleApi, ContentLifecycleService, LifecycleConfig,
        LifecycleError,
    };
    use futures::future::join_all;
    use shared_types::{Answer, ContentKind, ManualClock, Question};
    use std::sync::Arc;

    use crate::integration::fixtures::{principal, tags};

    type RaceStore = YieldingStore<InMemoryDocumentStore<Arc<ManualClock>, SequentialIdGenerator>>;

    async fn racing_forum(mode: ConcurrencyMode) -> (ContentLifecycleService<RaceStore>, String) {
        let store = Arc::new(YieldingStore::new(InMemoryDocumentStore::with_dependencies(
            Arc::new(ManualClock::new(1_000)),
            SequentialIdGenerator::new(),
        )));
        store.initialize().await.unwrap();

        let service = ContentLifecycleService::with_config(
            store,
            LifecycleConfig::default().with_concurrency(mode),
        );
        let qid = service
            .ask_question("Race", "Who wins?", &tags(&["race"]), &principal("alice"))
            .await
            .unwrap();
        (service, qid)
    }

    async fn race_answers(
        service: &ContentLifecycleService<RaceStore>,
        qid: &str,
        racers: &[&str],
    ) -> Vec<Result<String, LifecycleError>> {
        let authors: Vec<_> = racers.iter().map(|r| principal(r)).collect();
        join_all(
            authors
                .iter()
                .map(|author| service.answer_question(qid, "racing answer", author)),
        )
        .await
    }

    #[tokio::test]
    async fn test_last_write_wins_loses_answers() {
        let (service, qid) = racing_forum(ConcurrencyMode::LastWriteWins).await;

        let results = race_answers(&service, &qid, &["bob", "carol", "dave"]).await;
        assert!(results.iter().all(Result::is_ok));

        let answers: Vec<Answer> = service.store().find(&[]).await.unwrap();
        assert_eq!(answers.len(), 3);

        let q: Question = service.store().fetch(&qid).await.unwrap();
        assert_eq!(q.answer_ids.len(), 1, "only the last writer's append survives");
    }

    #[tokio::test]
    async fn test_optimistic_detects_conflicts() {
        let (service, qid) = racing_forum(ConcurrencyMode::Optimistic).await;

        let results = race_answers(&service, &qid, &["bob", "carol", "dave"]).await;
        let winners: Vec<&String> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, LifecycleError::Conflict { operation: "answer_question", .. })
                && e.is_retryable()));

        let q: Question = service.store().fetch(&qid).await.unwrap();
        assert_eq!(q.answer_ids, vec![winners[0].clone()]);
        let answers: Vec<Answer> = service.store().find(&[]).await.unwrap();
        assert_eq!(answers.len(), q.answer_ids.len(), "losers leave no answer behind");

        // A loser that re-reads and retries lands.
        let retried = service
            .answer_question(&qid, "second try", &principal("carol"))
            .await
            .unwrap();
        let q: Question = service.store().fetch(&qid).await.unwrap();
        assert_eq!(q.answer_ids, vec![winners[0].clone(), retried]);
        let detail = service.get_question(&qid).await.unwrap();
        assert_eq!(detail.answers.len(), 2);
    }

    #[tokio::test]
    async fn test_racing_votes() {
        for mode in [ConcurrencyMode::LastWriteWins, ConcurrencyMode::Optimistic] {
            let (service, qid) = racing_forum(mode).await;
            let voters = [principal("bob"), principal("carol")];

            let results = join_all(voters.iter().map(|v| {
                service.vote_on_content(ContentKind::Question, &qid, v, VoteDirection::Up)
            }))
            .await;

            let q: Question = service.store().fetch(&qid).await.unwrap();
            assert_eq!(q.upvotes.len(), 1);
            assert_eq!(q.vote_count, 1);

            let failures = results.iter().filter(|r| r.is_err()).count();
            match mode {
                ConcurrencyMode::LastWriteWins => assert_eq!(failures, 0),
                ConcurrencyMode::Optimistic => assert_eq!(failures, 1),
            }
        }
    }
}
