use super::ArticleQueryService;
use crate::{
    application::{
        dto::ResolvedArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article, article::Article, page::PageId},
};

pub struct ResolveByPageIdQuery {
    /// Raw caller-supplied identifier; validated here, not upstream.
    pub raw_id: String,
}

impl ArticleQueryService {
    /// Resolve the current article for a numeric page id. A non-numeric
    /// or negative identifier is an `InvalidRequest`, distinct from
    /// `NotFound`, and never reaches the store.
    pub async fn resolve_by_page_id(
        &self,
        query: ResolveByPageIdQuery,
    ) -> ApplicationResult<ResolvedArticleDto> {
        let page_id = PageId::parse(&query.raw_id)?;
        let article = self.current_for_page(page_id).await?;
        Ok(article.into())
    }

    pub(super) async fn current_for_page(&self, page_id: PageId) -> ApplicationResult<Article> {
        let articles = self.article_repo.find_by_page_id(page_id).await?;
        article::current_article(articles)
            .ok_or_else(|| ApplicationError::not_found(format!("no article for page {page_id}")))
    }
}
