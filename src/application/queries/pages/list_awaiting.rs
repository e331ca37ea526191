use super::PageQueryService;
use crate::application::{
    dto::{AwaitingArticleIndexDto, PageAwaitingArticleDto},
    error::ApplicationResult,
};

fn default_limit() -> u32 {
    20
}

pub struct ListAwaitingArticleQuery {
    pub limit: Option<u32>,
}

impl PageQueryService {
    /// Work queue for the article generation pipeline: pages that carry
    /// a slug but have no article row yet.
    pub async fn list_awaiting_article(
        &self,
        query: ListAwaitingArticleQuery,
    ) -> ApplicationResult<AwaitingArticleIndexDto> {
        let limit = query.limit.unwrap_or_else(default_limit).clamp(1, 100);
        let pages: Vec<PageAwaitingArticleDto> = self
            .page_repo
            .list_awaiting_article(limit)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(AwaitingArticleIndexDto {
            count: pages.len(),
            message: "Pages available for article generation (no article yet)".into(),
            pages,
        })
    }
}
