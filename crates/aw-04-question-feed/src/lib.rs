//! # Question Feed (aw-04)
//!
//! Sorted, paginated views over the whole Questions collection.
//!
//! There is no index: every call scans all questions (and, for `active`,
//! all answers) and sorts in memory, O(n log n) per page. That is fine at
//! forum scale and the known limit beyond it.
//!
//! ## Sort strategies
//!
//! | Name | Order (descending) |
//! |------|--------------------|
//! | `newest` | `createdAt` |
//! | `active` | latest answer `createdAt`, or the question's own if unanswered |
//! | `bounty` | `bountyAmount` |
//! | `hot` | `voteCount + createdAt / 1_000_000` |
//!
//! All sorts are stable: equal keys keep the store's scan order (newest first).

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::FeedConfig;
pub use domain::errors::FeedError;
pub use domain::page::PageRequest;
pub use domain::sort::SortStrategy;
pub use ports::inbound::QuestionFeedApi;
pub use service::QuestionFeedService;
