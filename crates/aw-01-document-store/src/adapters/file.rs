use crate::domain::errors::StoreError;
use crate::domain::patch::Patch;
use crate::domain::query::Predicate;
use crate::domain::table::CollectionTable;
use crate::domain::tables::Tables;
use crate::ports::inbound::DocumentStore;
use crate::ports::outbound::{IdGenerator, RandomIdGenerator, TimeSource};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Collection, Document, DocumentId, SystemTimeSource};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File-backed document store.
///
/// Keeps every collection in memory and mirrors each one to
/// `<data_dir>/<collection>.json`. A write only succeeds once the collection
/// file has been replaced on disk; if persisting fails the in-memory change
/// is rolled back.
///
/// Every operation does its file I/O (including `sync_all`) synchronously
/// while holding the table lock, so each call blocks the executor thread it
/// runs on for the duration of the write. Sized for single-user CLI runs.
pub struct FileBackedDocumentStore<TS = SystemTimeSource, IG = RandomIdGenerator> {
    data_dir: PathBuf,
    tables: RwLock<Tables>,
    time_source: TS,
    ids: IG,
}

impl FileBackedDocumentStore {
    /// Create a store rooted at `data_dir`. Nothing is read until `initialize`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::with_dependencies(data_dir, SystemTimeSource, RandomIdGenerator)
    }
}

impl<TS: TimeSource, IG: IdGenerator> FileBackedDocumentStore<TS, IG> {
    pub fn with_dependencies<P: AsRef<Path>>(data_dir: P, time_source: TS, ids: IG) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            tables: RwLock::new(Tables::new()),
            time_source,
            ids,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.name()))
    }

    fn load_collection(&self, collection: Collection) -> Result<CollectionTable, StoreError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            debug!("[aw-01] 📁 No existing file for {} at {}", collection, path.display());
            return Ok(CollectionTable::new(collection));
        }

        let bytes = std::fs::read(&path)?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::schema(collection, format!("{}: {e}", path.display())))?;
        let table = CollectionTable::from_json(collection, value)?;

        info!(
            "[aw-01] 💾 Loaded {} {} from {}",
            table.len(),
            collection,
            path.display()
        );
        Ok(table)
    }

    fn save_collection(&self, table: &CollectionTable) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir)?;

        let path = self.collection_path(table.collection());
        let bytes = serde_json::to_vec_pretty(&table.to_json())
            .map_err(|e| StoreError::schema(table.collection(), e.to_string()))?;

        // Write atomically via temp file
        let temp_path = path.with_extension("json.tmp");
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Run `mutate` against one collection and persist it, restoring the
    /// previous contents if the write to disk fails.
    fn write_through<T>(
        &self,
        collection: Collection,
        mutate: impl FnOnce(&mut CollectionTable) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut tables = self.tables.write();
        let table = tables.table_mut(collection)?;
        let snapshot = table.clone();

        let result = mutate(&mut *table)?;
        if let Err(e) = self.save_collection(table) {
            warn!("[aw-01] Failed to persist {}: {}", collection, e);
            *table = snapshot;
            return Err(e);
        }
        Ok(result)
    }
}

#[async_trait]
impl<TS: TimeSource, IG: IdGenerator> DocumentStore for FileBackedDocumentStore<TS, IG> {
    async fn initialize(&self) -> Result<(), StoreError> {
        if self.tables.read().is_open() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.data_dir)?;
        let mut loaded = Vec::with_capacity(Collection::ALL.len());
        for collection in Collection::ALL {
            loaded.push(self.load_collection(collection)?);
        }

        let mut tables = self.tables.write();
        for table in loaded {
            tables.install(table);
        }
        tables.open();

        info!("[aw-01] File-backed document store ready at {}", self.data_dir.display());
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.tables.write().close();
        debug!("[aw-01] File-backed document store closed");
        Ok(())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document, StoreError> {
        self.tables.read().table(collection)?.get(id)
    }

    async fn add(&self, document: Document) -> Result<DocumentId, StoreError> {
        let now = self.time_source.now();
        let stored = self.write_through(document.collection(), |table| {
            table.insert_new(&document, || self.ids.next_id(now), now)
        })?;
        debug!("[aw-01] add {}/{}", stored.collection(), stored.id());
        Ok(stored.id().to_string())
    }

    async fn set(&self, id: &str, document: Document) -> Result<DocumentId, StoreError> {
        let now = self.time_source.now();
        self.write_through(document.collection(), |table| table.put(id, &document, now))?;
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
        self.write_through(collection, |table| {
            table.merge(id, &patch, expected_version, now)
        })?;
        Ok(id.to_string())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let existed = self.tables.read().table(collection)?.contains(id);
        if existed {
            self.write_through(collection, |table| Ok(table.remove(id)))?;
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
