//! # Node Container
//!
//! Holds the shared document store and the services built on top of it.
//!
//! ```text
//! aw-02 Vote Engine (pure)
//!         │
//! aw-03 Content Lifecycle ──┐
//! aw-04 Question Feed ──────┼──► aw-01 Document Store (memory | file)
//! aw-05 Governance ─────────┘
//! ```

pub mod config;
pub mod node;

pub use config::{ConfigError, NodeConfig, StorageBackend, StorageConfig};
pub use node::AskWeaveNode;
