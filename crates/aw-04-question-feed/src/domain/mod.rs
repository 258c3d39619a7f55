pub mod config;
pub mod errors;
pub mod page;
pub mod sort;
