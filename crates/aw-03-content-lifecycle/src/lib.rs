//! # Content Lifecycle Manager (aw-03)
//!
//! Owns every state transition of forum content: asking, answering, voting,
//! accepting, commenting, closing and the bounty flow. All persistence goes
//! through an injected [`DocumentStore`](aw_01_document_store::DocumentStore).
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforced by |
//! |----|-----------|-------------|
//! | 1 | Exclusive vote sets per principal | `aw-02-vote-engine` |
//! | 2 | No votes on own content | `vote_on_content` |
//! | 3 | `acceptedAnswerId` set at most once, to an answer of the same question | `accept_answer` |
//! | 4 | Closed questions take no new answers | `answer_question` |
//! | 5 | `viewCount` grows by exactly one per `get_question` | `get_question` |
//! | 6 | Tag counts only ever increase | `ask_question` |
//! | 7 | Raw store errors never escape; they are re-wrapped with the operation name | `LifecycleError::store` |
//!
//! ## Multi-write operations
//!
//! `answer_question`, `accept_answer`, `add_comment`, `create_bounty` and
//! `ask_question` (tags) each perform several independent document writes.
//! There is no transaction: a failure part way leaves the earlier writes in
//! place. For acceptance, readers treat `question.acceptedAnswerId` as
//! authoritative (see [`domain::views::reconcile_acceptance`]).
//!
//! ## Concurrency
//!
//! Under [`ConcurrencyMode::LastWriteWins`] read-modify-write sequences can
//! lose updates when two callers race. [`ConcurrencyMode::Optimistic`] passes
//! the version read back to the store, so the losing writer gets
//! [`LifecycleError::Conflict`] and may retry after re-reading.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::{ConcurrencyMode, LifecycleConfig};
pub use domain::errors::LifecycleError;
pub use domain::views::QuestionDetail;
pub use ports::inbound::ContentLifecycleApi;
pub use service::ContentLifecycleService;
