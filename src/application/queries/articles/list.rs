use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::article::ArticleStatus,
};

fn default_limit() -> u32 {
    100
}

pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let status = query
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?;
        let limit = query.limit.unwrap_or_else(default_limit).clamp(1, 100);

        let summaries = self.article_repo.list_summaries(status, limit).await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
