//! # AskWeave Node Library
//!
//! The container wiring the subsystems together and the CLI command set.
//! The main entry point is the `askweave` binary in `main.rs`; this library
//! exposes the same pieces for integration tests.
//!
//! ## Architectural Patterns
//!
//! - **Hexagonal Architecture**: each subsystem exposes an inbound port trait
//!   and depends on the `DocumentStore` port, never on a concrete backend
//! - **DDD**: each subsystem owns its domain rules and errors
//! - **Shared store**: one `Arc<dyn DocumentStore>` backs every service

pub mod commands;
pub mod container;

pub use commands::{execute, BountyCommand, Command, ProposalCommand};
pub use container::{AskWeaveNode, ConfigError, NodeConfig, StorageBackend, StorageConfig};
