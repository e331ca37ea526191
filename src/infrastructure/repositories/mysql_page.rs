// src/infrastructure/repositories/mysql_page.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    LinkedSlug, Page, PageAwaitingArticle, PageId, PageReadRepository, PageSlug,
};
use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

#[derive(Clone)]
pub struct MySqlPageRepository {
    pool: MySqlPool,
}

impl MySqlPageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    url_slug: String,
    page_title: Option<String>,
    region_name: Option<String>,
    theme_title: Option<String>,
    meta_description: Option<String>,
    hero_image_url: Option<String>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            url_slug: row.url_slug,
            page_title: row.page_title,
            region_name: row.region_name,
            theme_title: row.theme_title,
            meta_description: row.meta_description,
            hero_image_url: row.hero_image_url,
        })
    }
}

#[derive(Debug, FromRow)]
struct LinkedSlugRow {
    page_id: i64,
    url_slug: String,
    page_title: Option<String>,
    article_title: Option<String>,
}

impl TryFrom<LinkedSlugRow> for LinkedSlug {
    type Error = DomainError;

    fn try_from(row: LinkedSlugRow) -> Result<Self, Self::Error> {
        Ok(LinkedSlug {
            page_id: PageId::new(row.page_id)?,
            url_slug: row.url_slug,
            page_title: row.page_title,
            article_title: row.article_title,
        })
    }
}

#[derive(Debug, FromRow)]
struct AwaitingArticleRow {
    page_id: i64,
    url_slug: String,
    page_title: Option<String>,
    area_name: Option<String>,
    theme_name: Option<String>,
}

impl TryFrom<AwaitingArticleRow> for PageAwaitingArticle {
    type Error = DomainError;

    fn try_from(row: AwaitingArticleRow) -> Result<Self, Self::Error> {
        Ok(PageAwaitingArticle {
            page_id: PageId::new(row.page_id)?,
            url_slug: row.url_slug,
            page_title: row.page_title,
            area_name: row.area_name,
            theme_name: row.theme_name,
        })
    }
}

#[async_trait]
impl PageReadRepository for MySqlPageRepository {
    /// Exact matching is pushed into the store over the slash-decorated
    /// variants of the slug; the application layer still re-checks
    /// equality after normalization as a safety net.
    async fn find_candidates_by_slug(&self, slug: &PageSlug) -> DomainResult<Vec<Page>> {
        let bare = slug.as_str();
        let rows = sqlx::query_as::<_, PageRow>(
            "SELECT id, url_slug, page_title, region_name, theme_title, meta_description, hero_image_url
             FROM page_data
             WHERE url_slug IN (?, CONCAT('/', ?), CONCAT(?, '/'), CONCAT('/', ?, '/'))",
        )
        .bind(bare)
        .bind(bare)
        .bind(bare)
        .bind(bare)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }

    async fn list_linked_slugs(&self, limit: u32) -> DomainResult<Vec<LinkedSlug>> {
        let rows = sqlx::query_as::<_, LinkedSlugRow>(
            "SELECT p.id AS page_id, p.url_slug, p.page_title, a.title AS article_title
             FROM page_data p
             INNER JOIN articles a ON a.page_id = p.id
             WHERE p.url_slug IS NOT NULL AND p.url_slug != ''
             ORDER BY p.id
             LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(LinkedSlug::try_from).collect()
    }

    async fn list_awaiting_article(&self, limit: u32) -> DomainResult<Vec<PageAwaitingArticle>> {
        let rows = sqlx::query_as::<_, AwaitingArticleRow>(
            "SELECT p.id AS page_id, p.url_slug, p.page_title, p.area_name, p.theme_name
             FROM page_data p
             LEFT JOIN articles a ON a.page_id = p.id
             WHERE p.url_slug IS NOT NULL AND p.url_slug != ''
               AND a.id IS NULL
             ORDER BY p.id
             LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PageAwaitingArticle::try_from).collect()
    }
}
