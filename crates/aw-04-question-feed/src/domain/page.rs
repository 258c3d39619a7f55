//! Page requests and slicing.

use crate::domain::sort::SortStrategy;
use serde::{Deserialize, Serialize};

/// Default number of questions per page.
pub const DEFAULT_LIMIT: usize = 10;

/// One page of a question listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
    pub sort: SortStrategy,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort: SortStrategy::Newest,
        }
    }
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize, sort: SortStrategy) -> Self {
        Self { limit, offset, sort }
    }

    pub fn sorted_by(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }
}

/// Items `[offset, offset + limit)`; empty when `offset` is past the end.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
