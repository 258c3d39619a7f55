//! Adapters layer
//!
//! - `memory` - process-local store for tests and the default node
//! - `file` - one JSON file per collection, written atomically
//! - `faulty` - wrapper that injects `Unavailable` failures

pub mod faulty;
pub mod file;
pub mod memory;

pub use faulty::FaultyDocumentStore;
pub use file::FileBackedDocumentStore;
pub use memory::InMemoryDocumentStore;
