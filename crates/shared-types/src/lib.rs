//! # Shared Types Crate
//!
//! This crate contains the forum records, the `Document` envelope that tags a
//! record with its collection, and the identity/time primitives used by every
//! AskWeave subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All persisted record shapes are defined here.
//! - **Typed Documents**: Collections hold explicit record types, never an
//!   untyped bag of fields. The JSON shape (camelCase) matches what the
//!   document store persists.
//! - **Opaque Identity**: A `Principal` is an already-authenticated wallet
//!   identity. Its internal structure is never inspected.

pub mod document;
pub mod entities;
pub mod errors;
pub mod time;

pub use document::{Collection, Document, Record};
pub use entities::*;
pub use errors::*;
pub use time::{ManualClock, SystemTimeSource, TimeSource};
