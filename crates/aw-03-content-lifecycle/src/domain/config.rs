//! Lifecycle configuration

use serde::{Deserialize, Serialize};
use shared_types::errors::TypeError;
use std::fmt;
use std::str::FromStr;

/// How read-modify-write sequences guard against concurrent writers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcurrencyMode {
    /// No detection; a racing writer may silently overwrite another's update.
    #[default]
    LastWriteWins,
    /// Compare-and-swap on the document version; the loser gets `Conflict`.
    Optimistic,
}

impl fmt::Display for ConcurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcurrencyMode::LastWriteWins => f.write_str("last-write-wins"),
            ConcurrencyMode::Optimistic => f.write_str("optimistic"),
        }
    }
}

impl FromStr for ConcurrencyMode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last-write-wins" | "lww" => Ok(ConcurrencyMode::LastWriteWins),
            "optimistic" | "cas" => Ok(ConcurrencyMode::Optimistic),
            other => Err(TypeError::UnknownVariant {
                kind: "concurrency mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Content lifecycle configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    pub concurrency: ConcurrencyMode,
}

impl LifecycleConfig {
    pub fn with_concurrency(mut self, concurrency: ConcurrencyMode) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Version to pass to `DocumentStore::update` for a document read at `version`.
    pub fn expected_version(&self, version: u64) -> Option<u64> {
        match self.concurrency {
            ConcurrencyMode::LastWriteWins => None,
            ConcurrencyMode::Optimistic => Some(version),
        }
    }
}
