//! # Tables
//!
//! Every collection of a store plus its open/closed state. Adapters wrap a
//! `Tables` in a lock; this type carries no synchronization of its own.

use crate::domain::errors::StoreError;
use crate::domain::table::CollectionTable;
use shared_types::{Collection, Document, Timestamp};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Tables {
    open: bool,
    collections: HashMap<Collection, CollectionTable>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replace a collection wholesale (used when loading persisted state).
    pub fn install(&mut self, table: CollectionTable) {
        self.collections.insert(table.collection(), table);
    }

    /// Create any missing collection and accept operations. Idempotent.
    pub fn open(&mut self) {
        for collection in Collection::ALL {
            self.collections
                .entry(collection)
                .or_insert_with(|| CollectionTable::new(collection));
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn table(&self, collection: Collection) -> Result<&CollectionTable, StoreError> {
        if !self.open {
            return Err(StoreError::unavailable("document store is not initialized"));
        }
        self.collections
            .get(&collection)
            .ok_or_else(|| StoreError::unavailable(format!("collection {collection} missing")))
    }

    pub fn table_mut(&mut self, collection: Collection) -> Result<&mut CollectionTable, StoreError> {
        if !self.open {
            return Err(StoreError::unavailable("document store is not initialized"));
        }
        self.collections
            .get_mut(&collection)
            .ok_or_else(|| StoreError::unavailable(format!("collection {collection} missing")))
    }

    /// Store `document` under a freshly generated id.
    pub fn insert_new(
        &mut self,
        document: &Document,
        next_id: impl FnMut() -> String,
        now: Timestamp,
    ) -> Result<Document, StoreError> {
        self.table_mut(document.collection())?
            .insert_new(document, next_id, now)
    }
}
