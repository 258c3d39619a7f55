//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::Question;

use crate::domain::errors::FeedError;
use crate::domain::page::PageRequest;

/// Question listing API (Driving Port)
#[async_trait]
pub trait QuestionFeedApi: Send + Sync {
    /// One sorted page of questions. Listing does not count views.
    async fn get_questions(&self, page: PageRequest) -> Result<Vec<Question>, FeedError>;

    /// Questions carrying `tag`, sorted and paginated like `get_questions`.
    async fn get_questions_tagged(
        &self,
        tag: &str,
        page: PageRequest,
    ) -> Result<Vec<Question>, FeedError>;
}
