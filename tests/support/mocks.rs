// tests/support/mocks.rs
use async_trait::async_trait;

use onsen_guide::domain::article::{Article, ArticleReadRepository, ArticleStatus, ArticleSummary};
use onsen_guide::domain::errors::{DomainError, DomainResult};
use onsen_guide::domain::page::{
    LinkedSlug, Page, PageAwaitingArticle, PageId, PageReadRepository, PageSlug,
};

/* -------------------------------- ArticleReadRepository -------------------------------- */

/// インメモリの記事リポジトリ
pub struct InMemoryArticleRepo {
    pub articles: Vec<Article>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_page_id(&self, page_id: PageId) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .iter()
            .filter(|article| article.page_id == page_id)
            .cloned()
            .collect())
    }

    async fn list_summaries(
        &self,
        status: Option<ArticleStatus>,
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let mut rows: Vec<ArticleSummary> = self
            .articles
            .iter()
            .filter(|article| status.is_none_or(|s| article.status == s))
            .map(|article| ArticleSummary {
                id: article.id,
                page_id: article.page_id,
                status: article.status,
                title: article.title.clone(),
                meta_description: article.meta_description.clone(),
                word_count: article.word_count,
                generated_at: article.generated_at,
            })
            .collect();
        rows.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

/// 常に接続失敗を返す記事リポジトリ
pub struct UnavailableArticleRepo;

#[async_trait]
impl ArticleReadRepository for UnavailableArticleRepo {
    async fn find_by_page_id(&self, _page_id: PageId) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_summaries(
        &self,
        _status: Option<ArticleStatus>,
        _limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/* -------------------------------- PageReadRepository -------------------------------- */

/// インメモリのページリポジトリ。candidate 検索はわざと部分一致で
/// 返し、呼び出し側の正規化チェックを検証できるようにしてある。
pub struct InMemoryPageRepo {
    pub pages: Vec<Page>,
    pub linked: Vec<LinkedSlug>,
    pub awaiting: Vec<PageAwaitingArticle>,
}

impl InMemoryPageRepo {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            linked: vec![],
            awaiting: vec![],
        }
    }

    pub fn with_linked(mut self, linked: Vec<LinkedSlug>) -> Self {
        self.linked = linked;
        self
    }

    pub fn with_awaiting(mut self, awaiting: Vec<PageAwaitingArticle>) -> Self {
        self.awaiting = awaiting;
        self
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPageRepo {
    async fn find_candidates_by_slug(&self, slug: &PageSlug) -> DomainResult<Vec<Page>> {
        // Broad LIKE-style pre-filter: substring match, not exact.
        Ok(self
            .pages
            .iter()
            .filter(|page| page.url_slug.contains(slug.as_str()))
            .cloned()
            .collect())
    }

    async fn list_linked_slugs(&self, limit: u32) -> DomainResult<Vec<LinkedSlug>> {
        Ok(self.linked.iter().take(limit as usize).cloned().collect())
    }

    async fn list_awaiting_article(&self, limit: u32) -> DomainResult<Vec<PageAwaitingArticle>> {
        Ok(self.awaiting.iter().take(limit as usize).cloned().collect())
    }
}

/// 常に接続失敗を返すページリポジトリ
pub struct UnavailablePageRepo;

#[async_trait]
impl PageReadRepository for UnavailablePageRepo {
    async fn find_candidates_by_slug(&self, _slug: &PageSlug) -> DomainResult<Vec<Page>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_linked_slugs(&self, _limit: u32) -> DomainResult<Vec<LinkedSlug>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_awaiting_article(&self, _limit: u32) -> DomainResult<Vec<PageAwaitingArticle>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
