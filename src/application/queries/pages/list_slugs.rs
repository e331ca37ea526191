use super::PageQueryService;
use crate::application::{
    dto::{LinkedSlugDto, SlugIndexDto},
    error::ApplicationResult,
};

fn default_limit() -> u32 {
    20
}

pub struct ListLinkedSlugsQuery {
    pub limit: Option<u32>,
}

impl PageQueryService {
    /// Slug index for sitemap/landing rendering: pages that already
    /// have generated articles.
    pub async fn list_linked_slugs(
        &self,
        query: ListLinkedSlugsQuery,
    ) -> ApplicationResult<SlugIndexDto> {
        let limit = query.limit.unwrap_or_else(default_limit).clamp(1, 100);
        let slugs: Vec<LinkedSlugDto> = self
            .page_repo
            .list_linked_slugs(limit)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(SlugIndexDto {
            count: slugs.len(),
            slugs,
        })
    }
}
