//! Read-side views assembled from several documents.

use serde::{Deserialize, Serialize};
use shared_types::{Answer, Bounty, Comment, Question};
use std::cmp::Ordering;

/// A question joined with everything shown on its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub question: Question,
    /// Accepted answer first, then by descending `voteCount`.
    pub answers: Vec<Answer>,
    /// Bounty referenced by `question.bountyId`, if it still exists.
    pub bounty: Option<Bounty>,
    /// Comments on the question and on its answers, oldest first.
    pub comments: Vec<Comment>,
}

/// Make each answer's `isAccepted` agree with `question.acceptedAnswerId`.
///
/// Acceptance writes the question before the answer, so an interrupted
/// acceptance can leave the answer flag stale; the question wins.
pub fn reconcile_acceptance(question: &Question, answers: &mut [Answer]) {
    for answer in answers.iter_mut() {
        answer.is_accepted = question.accepted_answer_id.as_deref() == Some(answer.id.as_str());
    }
}

/// Stable sort: accepted first, then descending `voteCount`.
pub fn sort_answers(answers: &mut [Answer]) {
    answers.sort_by(answer_order);
}

fn answer_order(a: &Answer, b: &Answer) -> Ordering {
    b.is_accepted
        .cmp(&a.is_accepted)
        .then_with(|| b.vote_count.cmp(&a.vote_count))
}
