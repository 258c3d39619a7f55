//! Outbound Ports (Driven Ports)
//!
//! Dependencies the store adapters need from the outside world.

use shared_types::{DocumentId, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};

pub use shared_types::TimeSource;

/// Produces candidate document ids. The store retries on collision.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, now: Timestamp) -> DocumentId;
}

/// `id-<millis>-<7 random hex chars>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self, now: Timestamp) -> DocumentId {
        let random = uuid::Uuid::new_v4().simple().to_string();
        format!("id-{now}-{}", &random[..7])
    }
}

/// `id-1`, `id-2`, ... for deterministic tests.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, _now: Timestamp) -> DocumentId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{n}")
    }
}
