//! Ports layer. The only outbound dependency is the document store, used
//! through `aw_01_document_store::DocumentStore` directly.

pub mod inbound;
