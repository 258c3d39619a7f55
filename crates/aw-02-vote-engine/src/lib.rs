//! # Vote Engine (aw-02)
//!
//! Pure logic for toggle-with-exclusivity voting. Given the current up/down
//! sets of a question or answer, a voter and a direction, it computes the new
//! sets and the change to `voteCount`. It performs no I/O; the lifecycle
//! manager reads the sets, calls [`vote`], and persists the outcome.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Exclusive Sets | A principal is in at most one of `upvotes`/`downvotes` after any vote |
//! | 2 | Consistent Delta | `delta` equals the change in the voter's own contribution (+1 up, -1 down, 0 none) |
//! | 3 | Toggle | Voting the same direction twice restores the original sets |
//! | 4 | No Self-Votes | Authors are rejected by [`ensure_not_author`] before any computation |
//!
//! ## Outcomes
//!
//! | Before | Direction | After | Delta |
//! |--------|-----------|-------|-------|
//! | none | up | up | +1 |
//! | none | down | down | -1 |
//! | up | up | none | -1 |
//! | down | down | none | +1 |
//! | down | up | up | +2 |
//! | up | down | down | -2 |

pub mod domain;
pub mod error;

pub use domain::direction::VoteDirection;
pub use domain::tally::{ensure_not_author, vote, VoteOutcome, VoteSets};
pub use error::VoteError;
