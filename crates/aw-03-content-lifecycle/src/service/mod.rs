//! # Content Lifecycle Service
//!
//! Implements `ContentLifecycleApi` over any `DocumentStore`.
//!
//! Every mutation is a read-modify-write: load the document, decide, then
//! `update` with a patch. The configured `ConcurrencyMode` decides whether the
//! version read is passed back to the store as a compare-and-swap guard.

mod api;
mod tags;

use crate::domain::config::LifecycleConfig;
use crate::domain::errors::LifecycleError;
use aw_01_document_store::{DocumentStore, DocumentStoreExt, Patch};
use shared_types::{Answer, Bounty, Question, Record};
use std::sync::Arc;
use tracing::warn;

/// The Content Lifecycle Service.
pub struct ContentLifecycleService<S: DocumentStore + ?Sized> {
    /// Shared document store.
    pub(crate) store: Arc<S>,
    pub(crate) config: LifecycleConfig,
}

impl<S: DocumentStore + ?Sized> ContentLifecycleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, LifecycleConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: LifecycleConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub(crate) async fn load<R: Record>(
        &self,
        operation: &'static str,
        id: &str,
    ) -> Result<R, LifecycleError> {
        self.store
            .fetch::<R>(id)
            .await
            .map_err(|e| LifecycleError::store(operation, e))
    }

    pub(crate) async fn load_question(
        &self,
        operation: &'static str,
        id: &str,
    ) -> Result<Question, LifecycleError> {
        self.load::<Question>(operation, id).await
    }

    pub(crate) async fn load_answer(
        &self,
        operation: &'static str,
        id: &str,
    ) -> Result<Answer, LifecycleError> {
        self.load::<Answer>(operation, id).await
    }

    pub(crate) async fn load_bounty(
        &self,
        operation: &'static str,
        id: &str,
    ) -> Result<Bounty, LifecycleError> {
        self.load::<Bounty>(operation, id).await
    }

    /// Patch a document that was read at `read_version`.
    pub(crate) async fn write<R: Record>(
        &self,
        operation: &'static str,
        id: &str,
        read_version: u64,
        patch: Patch,
    ) -> Result<(), LifecycleError> {
        self.store
            .patch::<R>(id, patch, self.config.expected_version(read_version))
            .await
            .map(|_| ())
            .map_err(|e| LifecycleError::store(operation, e))
    }

    pub(crate) async fn create<R: Record>(
        &self,
        operation: &'static str,
        record: R,
    ) -> Result<String, LifecycleError> {
        self.store
            .insert(record)
            .await
            .map_err(|e| LifecycleError::store(operation, e))
    }

    /// Drop a child created ahead of a parent write that then failed, so it
    /// never shows up unreferenced.
    pub(crate) async fn discard<R: Record>(&self, id: &str) {
        if let Err(e) = self.store.delete(R::COLLECTION, id).await {
            warn!("[aw-03] Orphaned {} {} left behind: {}", R::COLLECTION, id, e);
        }
    }
}
