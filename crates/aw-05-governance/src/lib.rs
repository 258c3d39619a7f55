//! # Governance (aw-05)
//!
//! Lightweight DAO: principals open proposals, vote for or against while the
//! voting window is open, and anyone may settle a proposal once the window
//! has passed. Only the configured owner can mark an approved proposal as
//! implemented.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforced by |
//! |----|-----------|-------------|
//! | 1 | One vote per principal per proposal | `vote_on_proposal` |
//! | 2 | No votes after `voteEndTimestamp` | `vote_on_proposal` |
//! | 3 | Status only leaves `open` after the window closes | `finalize_proposal` |
//! | 4 | Approval needs quorum and a strict majority in favour | [`domain::proposal::settle`] |
//! | 5 | Only `approved` proposals become `implemented` | `implement_proposal` |
//!
//! ## Status machine
//!
//! ```text
//! open ──finalize──► approved ──implement──► implemented
//!   └────finalize──► rejected
//! ```
//!
//! Proposal writes always pass the version that was read back to the store,
//! so two racing voters cannot both land on the same snapshot.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::GovernanceConfig;
pub use domain::errors::GovernanceError;
pub use ports::inbound::GovernanceApi;
pub use service::GovernanceService;
