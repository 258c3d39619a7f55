//! # Node Flows
//!
//! The assembled node on the file backend: commands run through the same
//! entry point the binary uses, and state survives a restart.

#[cfg(test)]
mod tests {
    use askweave_node::{execute, AskWeaveNode, BountyCommand, Command, NodeConfig, StorageBackend};
    use aw_02_vote_engine::VoteDirection;
    use aw_03_content_lifecycle::ConcurrencyMode;
    use shared_types::ContentKind;

    use crate::integration::fixtures::principal;

    fn file_config(dir: &std::path::Path) -> NodeConfig {
        let mut config = NodeConfig::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = dir.to_path_buf();
        config
    }

    #[tokio::test]
    async fn test_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let alice = principal("alice");
        let bob = principal("bob");

        let node = AskWeaveNode::start(file_config(dir.path())).await.unwrap();
        let asked = execute(
            &node,
            Command::Ask {
                title: "Persisted?".into(),
                content: "Across restarts".into(),
                tags: vec!["storage".into()],
            },
            Some(&alice),
        )
        .await
        .unwrap();
        let qid = asked["questionId"].as_str().unwrap().to_string();

        execute(
            &node,
            Command::Vote {
                kind: ContentKind::Question,
                id: qid.clone(),
                direction: VoteDirection::Up,
            },
            Some(&bob),
        )
        .await
        .unwrap();
        node.shutdown().await.unwrap();

        let node = AskWeaveNode::start(file_config(dir.path())).await.unwrap();
        let shown = execute(&node, Command::Show { question_id: qid }, None)
            .await
            .unwrap();
        assert_eq!(shown["question"]["voteCount"], 1);
        assert_eq!(shown["question"]["upvotes"][0], "bob");
        assert_eq!(shown["question"]["viewCount"], 1);

        let tags = execute(&node, Command::Tags, None).await.unwrap();
        assert_eq!(tags[0]["count"], 1);
        node.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_bounty_commands() {
        let dir = tempfile::tempdir().unwrap();
        let node = AskWeaveNode::start(file_config(dir.path())).await.unwrap();

        let qid = execute(
            &node,
            Command::Ask {
                title: "t".into(),
                content: "c".into(),
                tags: vec!["x".into()],
            },
            Some(&principal("alice")),
        )
        .await
        .unwrap()["questionId"]
            .as_str()
            .unwrap()
            .to_string();
        let aid = execute(
            &node,
            Command::Answer {
                question_id: qid.clone(),
                content: "a".into(),
            },
            Some(&principal("bob")),
        )
        .await
        .unwrap()["answerId"]
            .as_str()
            .unwrap()
            .to_string();

        let sponsor = principal("sponsor");
        let bid = execute(
            &node,
            Command::Bounty {
                command: BountyCommand::Create {
                    question_id: qid.clone(),
                    amount: 25,
                },
            },
            Some(&sponsor),
        )
        .await
        .unwrap()["bountyId"]
            .as_str()
            .unwrap()
            .to_string();

        execute(
            &node,
            Command::Bounty {
                command: BountyCommand::Award {
                    bounty_id: bid,
                    answer_id: aid,
                },
            },
            Some(&sponsor),
        )
        .await
        .unwrap();

        let shown = execute(&node, Command::Show { question_id: qid }, None)
            .await
            .unwrap();
        assert_eq!(shown["question"]["bountyAmount"], 25);
        assert_eq!(shown["bounty"]["isPaid"], true);
        assert_eq!(shown["bounty"]["paidTo"], "bob");
    }

    #[tokio::test]
    async fn test_errors_surface_with_context() {
        let mut config = NodeConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.lifecycle.concurrency = ConcurrencyMode::Optimistic;
        let node = AskWeaveNode::start(config).await.unwrap();

        let err = execute(
            &node,
            Command::Answer {
                question_id: "missing".into(),
                content: "hello".into(),
            },
            Some(&principal("bob")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Question missing not found");
    }

    #[tokio::test]
    async fn test_invalid_config_refuses_to_start() {
        let mut config = NodeConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.feed.default_page_size = 0;
        assert!(AskWeaveNode::start(config).await.is_err());
    }
}
