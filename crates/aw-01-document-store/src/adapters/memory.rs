use crate::domain::errors::StoreError;
use crate::domain::patch::Patch;
use crate::domain::query::Predicate;
use crate::domain::tables::Tables;
use crate::ports::inbound::DocumentStore;
use crate::ports::outbound::{IdGenerator, RandomIdGenerator, TimeSource};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Collection, Document, DocumentId, SystemTimeSource};
use tracing::{debug, info};

/// In-memory document store.
///
/// All collections live behind one `RwLock`, so every operation is atomic
/// with respect to every other. Contents are lost when the process exits.
pub struct InMemoryDocumentStore<TS = SystemTimeSource, IG = RandomIdGenerator> {
    tables: RwLock<Tables>,
    time_source: TS,
    ids: IG,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_dependencies(SystemTimeSource, RandomIdGenerator)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<TS: TimeSource> InMemoryDocumentStore<TS, RandomIdGenerator> {
    pub fn with_clock(time_source: TS) -> Self {
        Self::with_dependencies(time_source, RandomIdGenerator)
    }
}

impl<TS: TimeSource, IG: IdGenerator> InMemoryDocumentStore<TS, IG> {
    pub fn with_dependencies(time_source: TS, ids: IG) -> Self {
        Self {
            tables: RwLock::new(Tables::new()),
            time_source,
            ids,
        }
    }

    /// Documents currently stored in `collection` (0 when closed).
    pub fn count(&self, collection: Collection) -> usize {
        self.tables
            .read()
            .table(collection)
            .map(|t| t.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl<TS: TimeSource, IG: IdGenerator> DocumentStore for InMemoryDocumentStore<TS, IG> {
    async fn initialize(&self) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        if !tables.is_open() {
            tables.open();
            info!("[aw-01] In-memory document store ready ({} collections)", Collection::ALL.len());
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.tables.write().close();
        debug!("[aw-01] In-memory document store closed");
        Ok(())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document, StoreError> {
        self.tables.read().table(collection)?.get(id)
    }

    async fn add(&self, document: Document) -> Result<DocumentId, StoreError> {
        let now = self.time_source.now();
        let stored = self
            .tables
            .write()
            .insert_new(&document, || self.ids.next_id(now), now)?;
        debug!("[aw-01] add {}/{}", stored.collection(), stored.id());
        Ok(stored.id().to_string())
    }

    async fn set(&self, id: &str, document: Document) -> Result<DocumentId, StoreError> {
        let now = self.time_source.now();
        let mut tables = self.tables.write();
        tables.table_mut(document.collection())?.put(id, &document, now)?;
        debug!("[aw-01] set {}/{}", document.collection(), id);
        Ok(id.to_string())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Patch,
        expected_version: Option<u64>,
    ) -> Result<DocumentId, StoreError> {
        let now = self.time_source.now();
        let mut tables = self.tables.write();
        tables
            .table_mut(collection)?
            .merge(id, &patch, expected_version, now)?;
        Ok(id.to_string())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        if tables.table_mut(collection)?.remove(id) {
            debug!("[aw-01] delete {}/{}", collection, id);
        }
        Ok(())
    }

    async fn query(
        &self,
        collection: Collection,
        predicates: &[Predicate],
    ) -> Result<Vec<Document>, StoreError> {
        self.tables.read().table(collection)?.scan(predicates)
    }
}
