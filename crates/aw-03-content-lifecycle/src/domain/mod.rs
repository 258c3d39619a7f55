//! Domain layer: configuration, errors, input validation and read views.

pub mod config;
pub mod errors;
pub mod validation;
pub mod views;
