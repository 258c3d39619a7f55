//! # Domain Layer
//!
//! Pure document-store logic. No file or network I/O lives here; adapters
//! decide where the tables are kept.
//!
//! ## Modules
//!
//! - `errors` - Store error taxonomy
//! - `patch` - Shallow-merge partial updates
//! - `query` - Comparison predicates evaluated during scans
//! - `table` - One collection's documents and its write rules
//! - `tables` - All collections plus the open/closed lifecycle

pub mod errors;
pub mod patch;
pub mod query;
pub mod table;
pub mod tables;
