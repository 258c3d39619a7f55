//! # Error Types
//!
//! Errors raised while constructing or parsing shared primitives.

use thiserror::Error;

/// Errors produced by shared type constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A principal identity string was empty.
    #[error("Principal identity must be a non-empty string")]
    EmptyPrincipal,

    /// A string did not name any known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
