//! # Collection Table
//!
//! Holds one collection's documents as JSON objects keyed by id and applies
//! the write rules: store-owned metadata, version bumps, compare-and-swap and
//! schema validation.

use crate::domain::errors::StoreError;
use crate::domain::patch::Patch;
use crate::domain::query::{matches_all, Predicate};
use serde_json::{Map, Value};
use shared_types::{Collection, Document, DocumentId, Timestamp};
use std::collections::BTreeMap;

type Object = Map<String, Value>;

/// Attempts to find an unused generated id before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Documents of a single collection.
#[derive(Debug, Clone)]
pub struct CollectionTable {
    collection: Collection,
    documents: BTreeMap<DocumentId, Object>,
}

impl CollectionTable {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            documents: BTreeMap::new(),
        }
    }

    /// Rebuild from a persisted `{ id: document }` object, validating each entry.
    pub fn from_json(collection: Collection, value: Value) -> Result<Self, StoreError> {
        let Value::Object(entries) = value else {
            return Err(StoreError::schema(collection, "collection is not a JSON object"));
        };

        let mut table = Self::new(collection);
        for (id, document) in entries {
            let Value::Object(object) = document else {
                return Err(StoreError::schema(
                    collection,
                    format!("document {id} is not a JSON object"),
                ));
            };
            table.validate(&object)?;
            table.documents.insert(id, object);
        }
        Ok(table)
    }

    /// Persisted `{ id: document }` form.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.documents
                .iter()
                .map(|(id, doc)| (id.clone(), Value::Object(doc.clone())))
                .collect(),
        )
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Result<Document, StoreError> {
        let object = self.documents.get(id).ok_or_else(|| self.not_found(id))?;
        self.validate(object)
    }

    /// Insert or replace the document stored under `id`.
    ///
    /// `createdAt` comes from the incoming record when set, else from the
    /// replaced document, else `now`.
    pub fn put(&mut self, id: &str, document: &Document, now: Timestamp) -> Result<Document, StoreError> {
        if document.collection() != self.collection {
            return Err(StoreError::schema(
                self.collection,
                format!("{} document written to wrong collection", document.collection()),
            ));
        }

        let mut object = match document.to_value() {
            Ok(Value::Object(object)) => object,
            Ok(_) => return Err(StoreError::schema(self.collection, "document is not a JSON object")),
            Err(e) => return Err(StoreError::schema(self.collection, e.to_string())),
        };

        let existing = self.documents.get(id);
        let created_at = timestamp_field(&object, "createdAt")
            .or_else(|| existing.and_then(|d| timestamp_field(d, "createdAt")))
            .unwrap_or(now);
        let version = existing.map(version_of).unwrap_or(0) + 1;

        object.insert("id".to_string(), Value::from(id));
        object.insert("createdAt".to_string(), Value::from(created_at));
        object.insert("updatedAt".to_string(), Value::from(now));
        object.insert("version".to_string(), Value::from(version));

        let stored = self.validate(&object)?;
        self.documents.insert(id.to_string(), object);
        Ok(stored)
    }

    /// Store `document` under the first id from `next_id` not already taken.
    pub fn insert_new(
        &mut self,
        document: &Document,
        mut next_id: impl FnMut() -> DocumentId,
        now: Timestamp,
    ) -> Result<Document, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = next_id();
            if !self.contains(&id) {
                return self.put(&id, document, now);
            }
        }
        Err(StoreError::unavailable("could not generate a unique document id"))
    }

    /// Shallow-merge `patch` into the document under `id`.
    ///
    /// With `expected_version`, the write only happens if the stored version
    /// still matches.
    pub fn merge(
        &mut self,
        id: &str,
        patch: &Patch,
        expected_version: Option<u64>,
        now: Timestamp,
    ) -> Result<Document, StoreError> {
        let stored = self.documents.get(id).ok_or_else(|| self.not_found(id))?;
        let actual = version_of(stored);

        if let Some(expected) = expected_version {
            if expected != actual {
                return Err(StoreError::Conflict {
                    collection: self.collection,
                    id: id.to_string(),
                    expected,
                    actual,
                });
            }
        }

        let mut merged = stored.clone();
        patch.apply_to(&mut merged);
        merged.insert("updatedAt".to_string(), Value::from(now));
        merged.insert("version".to_string(), Value::from(actual + 1));

        let document = self.validate(&merged)?;
        self.documents.insert(id.to_string(), merged);
        Ok(document)
    }

    /// Remove a document; returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.documents.remove(id).is_some()
    }

    /// Every document matching all predicates, newest `createdAt` first.
    pub fn scan(&self, predicates: &[Predicate]) -> Result<Vec<Document>, StoreError> {
        let mut hits: Vec<(Timestamp, &str, &Object)> = self
            .documents
            .iter()
            .filter(|(_, doc)| matches_all(predicates, doc))
            .map(|(id, doc)| (timestamp_field(doc, "createdAt").unwrap_or(0), id.as_str(), doc))
            .collect();

        hits.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        hits.into_iter().map(|(_, _, doc)| self.validate(doc)).collect()
    }

    fn validate(&self, object: &Object) -> Result<Document, StoreError> {
        Document::from_value(self.collection, Value::Object(object.clone()))
            .map_err(|e| StoreError::schema(self.collection, e.to_string()))
    }

    fn not_found(&self, id: &str) -> StoreError {
        StoreError::NotFound {
            collection: self.collection,
            id: id.to_string(),
        }
    }
}

fn timestamp_field(object: &Object, field: &str) -> Option<Timestamp> {
    object.get(field).and_then(Value::as_u64).filter(|t| *t > 0)
}

fn version_of(object: &Object) -> u64 {
    object.get("version").and_then(Value::as_u64).unwrap_or(0)
}
