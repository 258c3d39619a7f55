//! # AskWeave Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Feed ranking at scale
//! └── src/integration/  # Cross-subsystem flows over a shared store
//!     ├── forum_flows.rs
//!     ├── concurrency.rs
//!     ├── governance_flows.rs
//!     └── node_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p aw-tests
//! cargo test -p aw-tests integration::concurrency
//! cargo bench -p aw-tests
//! ```

pub mod integration;
