//! # Document Store (aw-01)
//!
//! The Document Store is the only persistence primitive of AskWeave: named
//! collections of typed records with equality/inequality-filtered scans and
//! no secondary indexes.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Explicit Lifecycle | Every operation fails with `Unavailable` before `initialize` or after `close` |
//! | 2 | Schema at Boundary | A document that does not parse as its collection's record is never written or returned |
//! | 3 | Creation Preserved | `update` never changes `id` or `createdAt` |
//! | 4 | Monotonic Version | Every write bumps `version` by one |
//! | 5 | Compare-and-Swap | `update` with an expected version fails with `Conflict` on mismatch and writes nothing |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Collections, predicates, patches, errors (no I/O)
//! - `ports/` - `DocumentStore` API and the id/time dependencies it needs
//! - `adapters/` - In-memory, file-backed and fault-injecting stores
//!
//! ## Usage
//!
//! ```ignore
//! use aw_01_document_store::{DocumentStore, DocumentStoreExt, InMemoryDocumentStore, Predicate};
//!
//! let store = InMemoryDocumentStore::new();
//! store.initialize().await?;
//!
//! let id = store.insert(question).await?;
//! let answers: Vec<Answer> = store.find(&[Predicate::eq("questionId", id.clone())]).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{FaultyDocumentStore, FileBackedDocumentStore, InMemoryDocumentStore};
pub use domain::errors::StoreError;
pub use domain::patch::Patch;
pub use domain::query::{CompareOp, Predicate};
pub use ports::inbound::{DocumentStore, DocumentStoreExt};
pub use ports::outbound::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
