//! Sort strategies over a full question scan.

use crate::domain::errors::FeedError;
use serde::{Deserialize, Serialize};
use shared_types::{DocumentId, Question, Timestamp};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Divisor blending recency into the `hot` score.
pub const HOT_RECENCY_DIVISOR: f64 = 1_000_000.0;

/// Ordering of a question listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    #[default]
    Newest,
    Active,
    Bounty,
    Hot,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::Newest,
        SortStrategy::Active,
        SortStrategy::Bounty,
        SortStrategy::Hot,
    ];

    /// Whether ranking needs the latest answer time per question.
    pub fn needs_activity(self) -> bool {
        self == SortStrategy::Active
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortStrategy::Newest => "newest",
            SortStrategy::Active => "active",
            SortStrategy::Bounty => "bounty",
            SortStrategy::Hot => "hot",
        };
        f.write_str(s)
    }
}

impl FromStr for SortStrategy {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortStrategy::Newest),
            "active" => Ok(SortStrategy::Active),
            "bounty" => Ok(SortStrategy::Bounty),
            "hot" => Ok(SortStrategy::Hot),
            other => Err(FeedError::Validation(format!(
                "unknown sort '{other}' (expected newest, active, bounty or hot)"
            ))),
        }
    }
}

/// `voteCount + createdAt / 1_000_000`.
pub fn hot_score(question: &Question) -> f64 {
    question.vote_count as f64 + question.created_at as f64 / HOT_RECENCY_DIVISOR
}

/// Latest activity: newest answer time, or the question's own creation time.
pub fn last_activity(question: &Question, latest_answer: &HashMap<DocumentId, Timestamp>) -> Timestamp {
    latest_answer
        .get(&question.id)
        .copied()
        .unwrap_or(question.created_at)
}

/// Sort in place, best first. Stable.
///
/// `latest_answer` maps question id to its newest answer's `createdAt`; only
/// `Active` reads it.
pub fn rank(
    questions: &mut [Question],
    strategy: SortStrategy,
    latest_answer: &HashMap<DocumentId, Timestamp>,
) {
    match strategy {
        SortStrategy::Newest => questions.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortStrategy::Active => questions.sort_by(|a, b| {
            last_activity(b, latest_answer).cmp(&last_activity(a, latest_answer))
        }),
        SortStrategy::Bounty => questions.sort_by(|a, b| b.bounty_amount.cmp(&a.bounty_amount)),
        SortStrategy::Hot => questions.sort_by(|a, b| hot_score(b).total_cmp(&hot_score(a))),
    }
}
