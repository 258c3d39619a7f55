use crate::domain::errors::StoreError;
use crate::domain::patch::Patch;
use crate::domain::query::Predicate;
use crate::ports::inbound::DocumentStore;
use async_trait::async_trait;
use shared_types::{Collection, Document, DocumentId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Store wrapper that fails on demand with `Unavailable`.
///
/// Used to exercise the partial-write behavior of multi-step operations:
/// `fail_updates_after(n)` lets `n` updates through and fails every later one.
pub struct FaultyDocumentStore<S> {
    inner: S,
    unavailable: AtomicBool,
    updates_allowed: AtomicUsize,
    updates_seen: AtomicUsize,
}

impl<S: DocumentStore> FaultyDocumentStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            unavailable: AtomicBool::new(false),
            updates_allowed: AtomicUsize::new(usize::MAX),
            updates_seen: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Fail every operation until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Let the next `n` updates through, then fail all updates.
    pub fn fail_updates_after(&self, n: usize) {
        self.updates_seen.store(0, Ordering::SeqCst);
        self.updates_allowed.store(n, Ordering::SeqCst);
    }

    /// Stop injecting update failures.
    pub fn heal(&self) {
        self.set_unavailable(false);
        self.updates_allowed.store(usize::MAX, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("injected fault: store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for FaultyDocumentStore<S> {
    async fn initialize(&self) -> Result<(), StoreError> {
        self.check()?;
        self.inner.initialize().await
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.inner.close().await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document, StoreError> {
        self.check()?;
        self.inner.get(collection, id).await
    }

    async fn add(&self, document: Document) -> Result<DocumentId, StoreError> {
        self.check()?;
        self.inner.add(document).await
    }

    async fn set(&self, id: &str, document: Document) -> Result<DocumentId, StoreError> {
        self.check()?;
        self.inner.set(id, document).await
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Patch,
        expected_version: Option<u64>,
    ) -> Result<DocumentId, StoreError> {
        self.check()?;
        let seen = self.updates_seen.fetch_add(1, Ordering::SeqCst);
        if seen >= self.updates_allowed.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(format!(
                "injected fault on update {collection}/{id}"
            )));
        }
        self.inner.update(collection, id, patch, expected_version).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.delete(collection, id).await
    }

    async fn query(
        &self,
        collection: Collection,
        predicates: &[Predicate],
    ) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        self.inner.query(collection, predicates).await
    }
}
