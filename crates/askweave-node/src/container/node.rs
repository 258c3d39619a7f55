//! # AskWeave Node
//!
//! Builds the configured store, opens it, and shares it between the
//! lifecycle, feed and governance services.

use std::sync::Arc;

use anyhow::{Context, Result};
use aw_01_document_store::{DocumentStore, FileBackedDocumentStore, InMemoryDocumentStore};
use aw_03_content_lifecycle::ContentLifecycleService;
use aw_04_question_feed::QuestionFeedService;
use aw_05_governance::GovernanceService;
use tracing::info;

use crate::container::config::{NodeConfig, StorageBackend};

/// Type-erased store shared by every service.
pub type SharedStore = dyn DocumentStore;

/// Central container holding the store and all services.
pub struct AskWeaveNode {
    store: Arc<SharedStore>,
    pub lifecycle: ContentLifecycleService<SharedStore>,
    pub feed: QuestionFeedService<SharedStore>,
    pub governance: GovernanceService<SharedStore>,
    /// Node configuration (immutable after start).
    pub config: NodeConfig,
}

impl AskWeaveNode {
    /// Validate `config`, open the configured store and wire the services.
    pub async fn start(config: NodeConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;

        let store: Arc<SharedStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryDocumentStore::new()),
            StorageBackend::File => {
                Arc::new(FileBackedDocumentStore::new(&config.storage.data_dir))
            }
        };
        Self::with_store(store, config).await
    }

    /// Wire the services around an already-built store.
    pub async fn with_store(store: Arc<SharedStore>, config: NodeConfig) -> Result<Self> {
        store
            .initialize()
            .await
            .with_context(|| format!("failed to open {} store", config.storage.backend))?;

        let lifecycle =
            ContentLifecycleService::with_config(Arc::clone(&store), config.lifecycle.clone());
        let feed = QuestionFeedService::with_config(Arc::clone(&store), config.feed.clone());
        let governance = GovernanceService::new(Arc::clone(&store), config.governance.clone());

        info!("[aw-node] Node started ({} store)", config.storage.backend);
        Ok(Self {
            store,
            lifecycle,
            feed,
            governance,
            config,
        })
    }

    pub fn store(&self) -> Arc<SharedStore> {
        Arc::clone(&self.store)
    }

    /// Flush and close the store.
    pub async fn shutdown(&self) -> Result<()> {
        self.store.close().await.context("failed to close store")?;
        info!("[aw-node] Shutdown complete");
        Ok(())
    }
}
