//! # Patches
//!
//! A `Patch` is a partial document shallow-merged into the stored one:
//! top-level fields in the patch replace the stored fields, everything else
//! is kept.

use serde_json::{Map, Value};

/// Fields the store owns; a patch can never overwrite them.
pub(crate) const PROTECTED_FIELDS: [&str; 3] = ["id", "createdAt", "version"];

/// Partial update for a single document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    fields: Map<String, Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a top-level field (camelCase, as persisted).
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Set an optional field, writing `null` for `None`.
    pub fn set_opt<V: Into<Value>>(self, field: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(field, v),
            None => self.set(field, Value::Null),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Merge into `target`, skipping store-owned fields.
    pub(crate) fn apply_to(&self, target: &mut Map<String, Value>) {
        for (field, value) in &self.fields {
            if PROTECTED_FIELDS.contains(&field.as_str()) {
                continue;
            }
            target.insert(field.clone(), value.clone());
        }
    }
}
