//! # Time Sources
//!
//! All timestamps are milliseconds since the Unix epoch, the resolution the
//! forum ranks and displays by.

use crate::entities::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in milliseconds since epoch.
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Default time source using system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Controllable clock for deterministic tests.
///
/// Each call to `now` returns the current reading; it only moves when the
/// test calls `set` or `advance`.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Create a clock reading `start` milliseconds.
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: AtomicU64::new(start),
        }
    }

    /// Jump to an absolute reading.
    pub fn set(&self, millis: Timestamp) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Move the clock forward by `delta` milliseconds.
    pub fn advance(&self, delta: u64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.millis.load(Ordering::SeqCst)
    }
}
