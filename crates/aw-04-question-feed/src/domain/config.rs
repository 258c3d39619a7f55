//! Feed configuration

use crate::domain::errors::FeedError;
use crate::domain::page::{PageRequest, DEFAULT_LIMIT};
use crate::domain::sort::SortStrategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Page size used when the caller does not give one.
    pub default_page_size: usize,
    /// Operator cap on requested pages. `None` returns whatever the caller
    /// asks for.
    pub max_page_size: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_LIMIT,
            max_page_size: None,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.default_page_size == 0 {
            return Err(FeedError::Validation("default page size must be positive".into()));
        }
        if let Some(max) = self.max_page_size {
            if max < self.default_page_size {
                return Err(FeedError::Validation(format!(
                    "max page size {} is below default page size {}",
                    max, self.default_page_size
                )));
            }
        }
        Ok(())
    }

    pub fn clamp_limit(&self, limit: usize) -> usize {
        match self.max_page_size {
            Some(max) => limit.min(max),
            None => limit,
        }
    }

    /// Fill in whatever the caller left out.
    pub fn page_request(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
        sort: Option<SortStrategy>,
    ) -> PageRequest {
        PageRequest::new(
            limit.unwrap_or(self.default_page_size),
            offset.unwrap_or(0),
            sort.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FeedConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_limits() {
        let config = FeedConfig {
            default_page_size: 50,
            max_page_size: Some(20),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limit_uncapped_by_default() {
        assert_eq!(FeedConfig::default().clamp_limit(1_000), 1_000);

        let capped = FeedConfig {
            max_page_size: Some(100),
            ..Default::default()
        };
        assert_eq!(capped.clamp_limit(1_000), 100);
        assert_eq!(capped.clamp_limit(40), 40);
    }

    #[test]
    fn test_page_request_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.page_request(None, None, None), PageRequest::default());

        let page = config.page_request(Some(5), Some(10), Some(SortStrategy::Hot));
        assert_eq!(page, PageRequest::new(5, 10, SortStrategy::Hot));
    }
}
