use crate::domain::article::entity::{Article, ArticleSummary};
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::DomainResult;
use crate::domain::page::value_objects::PageId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Every article row for a page, in whatever order the store
    /// returns. Current-article selection happens in the domain.
    async fn find_by_page_id(&self, page_id: PageId) -> DomainResult<Vec<Article>>;

    /// Listing rows, newest first, optionally filtered to one status.
    async fn list_summaries(
        &self,
        status: Option<ArticleStatus>,
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>>;
}
