//! # Governance Flows
//!
//! Proposals live in the same store as forum content; a full
//! create → vote → finalize → implement run on the manual clock.

#[cfg(test)]
mod tests {
    use aw_04_question_feed::{PageRequest, QuestionFeedApi};
    use aw_05_governance::{GovernanceApi, GovernanceError};
    use shared_types::{ProposalKind, ProposalStatus};

    use crate::integration::fixtures::{principal, Forum};

    const WEEK_MS: u64 = 7 * 24 * 60 * 60 * 1000;

    #[tokio::test]
    async fn test_proposal_lifecycle() {
        let forum = Forum::new().await;
        let id = forum
            .governance
            .create_proposal(
                "Weekly digest",
                "Email a digest of hot questions",
                ProposalKind::Feature,
                &principal("alice"),
            )
            .await
            .unwrap();

        for i in 0..8 {
            forum
                .governance
                .vote_on_proposal(&id, &principal(&format!("member-{i}")), true)
                .await
                .unwrap();
        }
        for i in 0..3 {
            forum
                .governance
                .vote_on_proposal(&id, &principal(&format!("skeptic-{i}")), false)
                .await
                .unwrap();
        }

        let err = forum.governance.finalize_proposal(&id).await.unwrap_err();
        assert!(matches!(err, GovernanceError::VotingInProgress { .. }));

        forum.clock.advance(WEEK_MS + 1);
        let settled = forum.governance.finalize_proposal(&id).await.unwrap();
        assert_eq!(settled.status, ProposalStatus::Approved);
        assert_eq!((settled.votes_for, settled.votes_against), (8, 3));

        forum
            .governance
            .implement_proposal(&id, &principal("owner"))
            .await
            .unwrap();
        let done = forum.governance.get_proposal(&id).await.unwrap();
        assert_eq!(done.status, ProposalStatus::Implemented);
    }

    #[tokio::test]
    async fn test_quorum_not_reached() {
        let forum = Forum::new().await;
        let id = forum
            .governance
            .create_proposal("Tiny", "Few care", ProposalKind::Other, &principal("alice"))
            .await
            .unwrap();
        forum
            .governance
            .vote_on_proposal(&id, &principal("bob"), true)
            .await
            .unwrap();

        forum.clock.advance(WEEK_MS + 1);
        let settled = forum.governance.finalize_proposal(&id).await.unwrap();
        assert_eq!(settled.status, ProposalStatus::Rejected);

        let err = forum
            .governance
            .implement_proposal(&id, &principal("owner"))
            .await
            .unwrap_err();
        assert!(matches!(err, GovernanceError::NotApproved { .. }));
    }

    #[tokio::test]
    async fn test_proposals_stay_out_of_the_feed() {
        let forum = Forum::new().await;
        forum
            .governance
            .create_proposal("p", "d", ProposalKind::Parameter, &principal("alice"))
            .await
            .unwrap();

        let page = forum.feed.get_questions(PageRequest::default()).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(forum.governance.list_proposals().await.unwrap().len(), 1);
    }
}
