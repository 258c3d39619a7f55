//! # Node Configuration
//!
//! Unified configuration for the store and every service.
//!
//! Defaults are overridden from `AW_*` environment variables, then by CLI
//! flags. An unparsable variable is logged and ignored rather than aborting
//! startup.

use aw_03_content_lifecycle::{ConcurrencyMode, LifecycleConfig};
use aw_04_question_feed::FeedConfig;
use aw_05_governance::GovernanceConfig;
use shared_types::Principal;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    pub storage: StorageConfig,
    pub lifecycle: LifecycleConfig,
    pub feed: FeedConfig,
    pub governance: GovernanceConfig,
}

/// Where documents live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Volatile; gone when the process exits.
    Memory,
    /// One JSON file per collection under `data_dir`.
    #[default]
    File,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::File => f.write_str("file"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "file" | "json" => Ok(StorageBackend::File),
            other => Err(ConfigError::Invalid {
                section: "storage",
                reason: format!("unknown backend '{other}' (expected memory or file)"),
            }),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding the collection files (file backend only).
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {section} configuration: {reason}")]
    Invalid {
        section: &'static str,
        reason: String,
    },
}

impl NodeConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `AW_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = NodeConfig::default();

        if let Some(dir) = lookup("AW_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(backend) = parse_var(&lookup, "AW_STORAGE_BACKEND") {
            config.storage.backend = backend;
        }
        if let Some(mode) = parse_var::<ConcurrencyMode>(&lookup, "AW_CONCURRENCY") {
            config.lifecycle.concurrency = mode;
        }
        if let Some(size) = parse_var::<usize>(&lookup, "AW_PAGE_SIZE") {
            config.feed.default_page_size = size;
        }
        if let Some(max) = parse_var::<usize>(&lookup, "AW_MAX_PAGE_SIZE") {
            config.feed.max_page_size = Some(max);
        }
        if let Some(owner) = parse_var::<Principal>(&lookup, "AW_DAO_OWNER") {
            config.governance.owner = Some(owner);
        }
        if let Some(quorum) = parse_var(&lookup, "AW_DAO_QUORUM") {
            config.governance.minimum_quorum = quorum;
        }
        if let Some(period) = parse_var(&lookup, "AW_DAO_VOTING_PERIOD_MS") {
            config.governance.voting_period_ms = period;
        }

        config
    }

    /// Reject settings no service can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::File
            && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid {
                section: "storage",
                reason: "data directory is empty".into(),
            });
        }
        self.feed.validate().map_err(|e| ConfigError::Invalid {
            section: "feed",
            reason: e.to_string(),
        })?;
        self.governance.validate().map_err(|e| ConfigError::Invalid {
            section: "governance",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn log_summary(&self) {
        info!(
            "[aw-node] storage={} data_dir={:?} concurrency={} page_size={} max_page_size={:?}",
            self.storage.backend,
            self.storage.data_dir,
            self.lifecycle.concurrency,
            self.feed.default_page_size,
            self.feed.max_page_size
        );
        info!(
            "[aw-node] governance owner={} quorum={} voting_period_ms={}",
            self.governance
                .owner
                .as_ref()
                .map(|o| o.to_string())
                .unwrap_or_else(|| "<none>".into()),
            self.governance.minimum_quorum,
            self.governance.voting_period_ms
        );
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[aw-node] Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
