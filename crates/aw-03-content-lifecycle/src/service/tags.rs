//! Tag usage counters. A tag's name is its document id.

use super::ContentLifecycleService;
use crate::domain::errors::LifecycleError;
use aw_01_document_store::{DocumentStore, DocumentStoreExt, Patch, StoreError};
use shared_types::Tag;

impl<S: DocumentStore + ?Sized> ContentLifecycleService<S> {
    /// Read-or-create `name` and add one use. Returns the new count.
    pub(crate) async fn bump_tag(&self, name: &str) -> Result<u64, LifecycleError> {
        const OP: &str = "ask_question";

        match self.store.fetch::<Tag>(name).await {
            Ok(tag) => {
                let count = tag.count + 1;
                self.write::<Tag>(OP, name, tag.version, Patch::new().set("count", count))
                    .await?;
                Ok(count)
            }
            Err(StoreError::NotFound { .. }) => {
                self.store
                    .upsert(name, Tag::first_use(name))
                    .await
                    .map_err(|e| LifecycleError::store(OP, e))?;
                Ok(1)
            }
            Err(e) => Err(LifecycleError::store(OP, e)),
        }
    }
}
