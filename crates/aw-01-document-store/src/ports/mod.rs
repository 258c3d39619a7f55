//! Ports layer (Hexagonal Architecture)
//!
//! - `inbound` - `DocumentStore` API used by every other subsystem
//! - `outbound` - id generation and time, injected into the adapters

pub mod inbound;
pub mod outbound;
