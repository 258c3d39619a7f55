//! Shared fixtures: one in-memory store on a manual clock, with every
//! service wired over it.

use std::sync::Arc;

use aw_01_document_store::{DocumentStore, InMemoryDocumentStore, SequentialIdGenerator};
use aw_03_content_lifecycle::{ConcurrencyMode, ContentLifecycleService, LifecycleConfig};
use aw_04_question_feed::QuestionFeedService;
use aw_05_governance::{GovernanceConfig, GovernanceService};
use shared_types::{ManualClock, Principal};

pub type TestStore = InMemoryDocumentStore<Arc<ManualClock>, SequentialIdGenerator>;

/// All services sharing one store and one clock.
pub struct Forum {
    pub clock: Arc<ManualClock>,
    pub store: Arc<TestStore>,
    pub lifecycle: ContentLifecycleService<TestStore>,
    pub feed: QuestionFeedService<TestStore>,
    pub governance: GovernanceService<TestStore, Arc<ManualClock>>,
}

impl Forum {
    pub async fn new() -> Self {
        Self::with_concurrency(ConcurrencyMode::LastWriteWins).await
    }

    pub async fn with_concurrency(mode: ConcurrencyMode) -> Self {
        let clock = Arc::new(ManualClock::new(1_000));
        let store = Arc::new(InMemoryDocumentStore::with_dependencies(
            clock.clone(),
            SequentialIdGenerator::new(),
        ));
        store
            .initialize()
            .await
            .expect("in-memory store always opens");

        let lifecycle = ContentLifecycleService::with_config(
            store.clone(),
            LifecycleConfig::default().with_concurrency(mode),
        );
        let feed = QuestionFeedService::new(store.clone());
        let governance = GovernanceService::with_clock(
            store.clone(),
            clock.clone(),
            GovernanceConfig::default().with_owner(principal("owner")),
        );

        Self {
            clock,
            store,
            lifecycle,
            feed,
            governance,
        }
    }
}

pub fn principal(name: &str) -> Principal {
    Principal::new(name).expect("fixture principals are non-empty")
}

pub fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
