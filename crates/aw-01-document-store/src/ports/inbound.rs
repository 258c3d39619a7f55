//! Inbound Ports (Driving Ports)
//!
//! `DocumentStore` is the untyped API every adapter implements.
//! `DocumentStoreExt` layers typed helpers over it so callers work with
//! `Question`, `Answer` and friends instead of the `Document` enum.

use async_trait::async_trait;
use shared_types::{Collection, Document, DocumentId, Record};

use crate::domain::errors::StoreError;
use crate::domain::patch::Patch;
use crate::domain::query::Predicate;

/// Primary Document Store API (Driving Port)
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Prepare every collection. Calling it again is a no-op.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Stop accepting operations until the next `initialize`.
    async fn close(&self) -> Result<(), StoreError>;

    /// Fetch one document.
    ///
    /// # Errors
    /// `NotFound` when no document has this id in `collection`.
    async fn get(&self, collection: Collection, id: &str) -> Result<Document, StoreError>;

    /// Store a new document under a freshly generated id.
    ///
    /// Any id already on the document is ignored.
    async fn add(&self, document: Document) -> Result<DocumentId, StoreError>;

    /// Store a document under a caller-chosen id, replacing any existing one.
    async fn set(&self, id: &str, document: Document) -> Result<DocumentId, StoreError>;

    /// Shallow-merge `patch` into an existing document.
    ///
    /// # Arguments
    /// * `expected_version` - when `Some`, the write only happens if the stored
    ///   version is still this value; otherwise fails with `Conflict`
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Patch,
        expected_version: Option<u64>,
    ) -> Result<DocumentId, StoreError>;

    /// Remove a document. Deleting a missing id succeeds.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;

    /// Every document matching all predicates, newest `createdAt` first.
    async fn query(
        &self,
        collection: Collection,
        predicates: &[Predicate],
    ) -> Result<Vec<Document>, StoreError>;
}

/// Typed convenience layer over [`DocumentStore`].
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    /// Fetch a record of type `R`.
    async fn fetch<R: Record>(&self, id: &str) -> Result<R, StoreError> {
        let document = self.get(R::COLLECTION, id).await?;
        expect_record(document)
    }

    /// Add a new record; returns its generated id.
    async fn insert<R: Record>(&self, record: R) -> Result<DocumentId, StoreError> {
        self.add(record.into_document()).await
    }

    /// Store a record under a fixed id.
    async fn upsert<R: Record>(&self, id: &str, record: R) -> Result<DocumentId, StoreError> {
        self.set(id, record.into_document()).await
    }

    /// Query a collection and decode every hit as `R`.
    async fn find<R: Record>(&self, predicates: &[Predicate]) -> Result<Vec<R>, StoreError> {
        self.query(R::COLLECTION, predicates)
            .await?
            .into_iter()
            .map(expect_record)
            .collect()
    }

    /// Patch a record of type `R`.
    async fn patch<R: Record>(
        &self,
        id: &str,
        patch: Patch,
        expected_version: Option<u64>,
    ) -> Result<DocumentId, StoreError> {
        self.update(R::COLLECTION, id, patch, expected_version).await
    }
}

impl<T: DocumentStore + ?Sized> DocumentStoreExt for T {}

fn expect_record<R: Record>(document: Document) -> Result<R, StoreError> {
    let found = document.collection();
    R::from_document(document).ok_or_else(|| StoreError::Schema {
        collection: R::COLLECTION,
        message: format!("expected a {} record, found {found}", R::COLLECTION),
    })
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<T> {
    async fn initialize(&self) -> Result<(), StoreError> {
        (**self).initialize().await
    }

    async fn close(&self) -> Result<(), StoreError> {
        (**self).close().await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document, StoreError> {
        (**self).get(collection, id).await
    }

    async fn add(&self, document: Document) -> Result<DocumentId, StoreError> {
        (**self).add(document).await
    }

    async fn set(&self, id: &str, document: Document) -> Result<DocumentId, StoreError> {
        (**self).set(id, document).await
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Patch,
        expected_version: Option<u64>,
    ) -> Result<DocumentId, StoreError> {
        (**self).update(collection, id, patch, expected_version).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        (**self).delete(collection, id).await
    }

    async fn query(
        &self,
        collection: Collection,
        predicates: &[Predicate],
    ) -> Result<Vec<Document>, StoreError> {
        (**self).query(collection, predicates).await
    }
}
