//! # Forum Flows
//!
//! Ask → answer → vote → accept → bounty, run through the lifecycle service
//! and read back through the feed, all over one shared store.

#[cfg(test)]
mod tests {
    use aw_01_document_store::{DocumentStoreExt, FaultyDocumentStore};
    use aw_02_vote_engine::VoteDirection;
    use aw_03_content_lifecycle::{ContentLifecycleApi, ContentLifecycleService, LifecycleError};
    use aw_04_question_feed::{PageRequest, QuestionFeedApi, SortStrategy};
    use shared_types::{Answer, Bounty, ContentKind, Question, Tag};
    use std::sync::Arc;

    use crate::integration::fixtures::{principal, tags, Forum};

    async fn ask(forum: &Forum, author: &str, tag_names: &[&str]) -> String {
        forum
            .lifecycle
            .ask_question("How do lifetimes work?", "Details inside", &tags(tag_names), &principal(author))
            .await
            .unwrap()
    }

    // =========================================================================
    // VOTING
    // =========================================================================

    #[tokio::test]
    async fn test_double_upvote_restores_state() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;
        let bob = principal("bob");

        forum
            .lifecycle
            .vote_on_content(ContentKind::Question, &qid, &bob, VoteDirection::Up)
            .await
            .unwrap();
        forum
            .lifecycle
            .vote_on_content(ContentKind::Question, &qid, &bob, VoteDirection::Up)
            .await
            .unwrap();

        let q: Question = forum.store.fetch(&qid).await.unwrap();
        assert!(q.upvotes.is_empty());
        assert!(q.downvotes.is_empty());
        assert_eq!(q.vote_count, 0);
    }

    #[tokio::test]
    async fn test_switch_up_to_down() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;
        let aid = forum
            .lifecycle
            .answer_question(&qid, "Borrowing rules", &principal("bob"))
            .await
            .unwrap();
        let carol = principal("carol");

        forum
            .lifecycle
            .vote_on_content(ContentKind::Answer, &aid, &carol, VoteDirection::Up)
            .await
            .unwrap();
        let after_up: Answer = forum.store.fetch(&aid).await.unwrap();

        let outcome = forum
            .lifecycle
            .vote_on_content(ContentKind::Answer, &aid, &carol, VoteDirection::Down)
            .await
            .unwrap();
        assert_eq!(outcome.delta, -2);

        let after_down: Answer = forum.store.fetch(&aid).await.unwrap();
        assert!(after_down.upvotes.is_empty());
        assert_eq!(after_down.downvotes, vec![carol]);
        assert_eq!(after_down.vote_count, after_up.vote_count - 2);
    }

    #[tokio::test]
    async fn test_self_vote_changes_nothing() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;
        let before: Question = forum.store.fetch(&qid).await.unwrap();

        let err = forum
            .lifecycle
            .vote_on_content(ContentKind::Question, &qid, &principal("alice"), VoteDirection::Up)
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::SelfVoteForbidden { .. }));

        let after: Question = forum.store.fetch(&qid).await.unwrap();
        assert_eq!(before, after);
    }

    // =========================================================================
    // ASK / TAGS
    // =========================================================================

    #[tokio::test]
    async fn test_ask_validation() {
        let forum = Forum::new().await;
        let p = principal("alice");

        let err = forum
            .lifecycle
            .ask_question("", "x", &tags(&["t"]), &p)
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));

        let err = forum
            .lifecycle
            .ask_question("t", "c", &[], &p)
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));
    }

    #[tokio::test]
    async fn test_tag_counts_accumulate() {
        let forum = Forum::new().await;
        for author in ["alice", "bob", "carol"] {
            ask(&forum, author, &["arweave"]).await;
        }
        ask(&forum, "dave", &["rust"]).await;

        let tag: Tag = forum.store.fetch("arweave").await.unwrap();
        assert_eq!(tag.count, 3);

        let listed = forum.lifecycle.list_tags().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["arweave", "rust"]);
    }

    // =========================================================================
    // ACCEPT / VIEW
    // =========================================================================

    #[tokio::test]
    async fn test_accept_twice_keeps_first() {
        let forum = Forum::new().await;
        let alice = principal("alice");
        let qid = ask(&forum, "alice", &["rust"]).await;
        let first = forum
            .lifecycle
            .answer_question(&qid, "first", &principal("bob"))
            .await
            .unwrap();
        let second = forum
            .lifecycle
            .answer_question(&qid, "second", &principal("carol"))
            .await
            .unwrap();

        forum.lifecycle.accept_answer(&qid, &first, &alice).await.unwrap();
        let err = forum
            .lifecycle
            .accept_answer(&qid, &second, &alice)
            .await
            .unwrap_err();
        assert_eq!(err, LifecycleError::AlreadyAccepted(qid.clone()));

        let q: Question = forum.store.fetch(&qid).await.unwrap();
        assert_eq!(q.accepted_answer_id.as_deref(), Some(first.as_str()));
    }

    #[tokio::test]
    async fn test_views_count_per_read_but_not_per_listing() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;

        forum.feed.get_questions(PageRequest::default()).await.unwrap();
        forum.lifecycle.get_question(&qid).await.unwrap();
        let detail = forum.lifecycle.get_question(&qid).await.unwrap();

        assert_eq!(detail.question.view_count, 2);
    }

    #[tokio::test]
    async fn test_detail_puts_accepted_answer_first() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;
        let low = forum
            .lifecycle
            .answer_question(&qid, "short", &principal("bob"))
            .await
            .unwrap();
        let high = forum
            .lifecycle
            .answer_question(&qid, "long", &principal("carol"))
            .await
            .unwrap();
        forum
            .lifecycle
            .vote_on_content(ContentKind::Answer, &high, &principal("dave"), VoteDirection::Up)
            .await
            .unwrap();
        forum
            .lifecycle
            .accept_answer(&qid, &low, &principal("alice"))
            .await
            .unwrap();

        let detail = forum.lifecycle.get_question(&qid).await.unwrap();
        let ids: Vec<&str> = detail.answers.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec![low.as_str(), high.as_str()]);
        assert!(detail.answers[0].is_accepted);
    }

    #[tokio::test]
    async fn test_interrupted_accept_reads_consistently() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;
        let aid = forum
            .lifecycle
            .answer_question(&qid, "answer", &principal("bob"))
            .await
            .unwrap();

        let faulty = Arc::new(FaultyDocumentStore::new(forum.store.clone()));
        let flaky = ContentLifecycleService::new(faulty.clone());
        faulty.fail_updates_after(1);

        let err = flaky
            .accept_answer(&qid, &aid, &principal("alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::StorageUnavailable { .. }));

        // Question half landed, answer half did not.
        let raw: Answer = forum.store.fetch(&aid).await.unwrap();
        assert!(!raw.is_accepted);

        let detail = forum.lifecycle.get_question(&qid).await.unwrap();
        assert!(detail.question.is_accepted);
        assert!(detail.answers[0].is_accepted);
    }

    // =========================================================================
    // BOUNTIES
    // =========================================================================

    #[tokio::test]
    async fn test_bounty_award_flow() {
        let forum = Forum::new().await;
        let qid = ask(&forum, "alice", &["rust"]).await;
        let aid = forum
            .lifecycle
            .answer_question(&qid, "answer", &principal("bob"))
            .await
            .unwrap();
        let other_q = ask(&forum, "carol", &["go"]).await;
        let stray = forum
            .lifecycle
            .answer_question(&other_q, "elsewhere", &principal("bob"))
            .await
            .unwrap();

        let sponsor = principal("sponsor");
        let bid = forum
            .lifecycle
            .create_bounty(&qid, 50, &sponsor)
            .await
            .unwrap();

        let err = forum
            .lifecycle
            .award_bounty(&bid, &aid, &principal("mallory"))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Forbidden(_)));

        let err = forum
            .lifecycle
            .award_bounty(&bid, &stray, &sponsor)
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::MismatchedParent { .. }));

        forum.lifecycle.award_bounty(&bid, &aid, &sponsor).await.unwrap();
        let bounty: Bounty = forum.store.fetch(&bid).await.unwrap();
        assert!(!bounty.is_active);
        assert_eq!(bounty.paid_to, Some(principal("bob")));

        let err = forum
            .lifecycle
            .award_bounty(&bid, &aid, &sponsor)
            .await
            .unwrap_err();
        assert_eq!(err, LifecycleError::BountyInactive(bid));
    }

    // =========================================================================
    // FEED
    // =========================================================================

    #[tokio::test]
    async fn test_newest_listing() {
        let forum = Forum::new().await;
        let mut ids = Vec::new();
        for at in [100, 200, 300] {
            forum.clock.set(at);
            ids.push(ask(&forum, "alice", &["rust"]).await);
        }

        let page = forum
            .feed
            .get_questions(PageRequest::new(10, 0, SortStrategy::Newest))
            .await
            .unwrap();
        let created: Vec<u64> = page.iter().map(|q| q.created_at).collect();
        assert_eq!(created, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn test_bounty_and_active_listings() {
        let forum = Forum::new().await;
        forum.clock.set(100);
        let old = ask(&forum, "alice", &["rust"]).await;
        forum.clock.set(200);
        let rich = ask(&forum, "bob", &["rust"]).await;
        forum.clock.set(300);
        let fresh = ask(&forum, "carol", &["rust"]).await;

        forum
            .lifecycle
            .create_bounty(&rich, 100, &principal("sponsor"))
            .await
            .unwrap();
        forum.clock.set(400);
        forum
            .lifecycle
            .answer_question(&old, "late", &principal("dave"))
            .await
            .unwrap();

        let by_bounty = forum
            .feed
            .get_questions(PageRequest::default().sorted_by(SortStrategy::Bounty))
            .await
            .unwrap();
        assert_eq!(by_bounty[0].id, rich);

        let by_activity = forum
            .feed
            .get_questions(PageRequest::default().sorted_by(SortStrategy::Active))
            .await
            .unwrap();
        let ids: Vec<&str> = by_activity.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec![old.as_str(), fresh.as_str(), rich.as_str()]);
    }
}
