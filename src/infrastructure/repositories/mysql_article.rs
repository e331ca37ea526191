// src/infrastructure/repositories/mysql_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleSummary,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::PageId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

#[derive(Clone)]
pub struct MySqlArticleRepository {
    pool: MySqlPool,
}

impl MySqlArticleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    page_id: i64,
    status: String,
    title: Option<String>,
    content: Option<String>,
    meta_description: Option<String>,
    word_count: Option<i64>,
    // Nullable in the store; older rows predate the timestamp column.
    generated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            page_id: PageId::new(row.page_id)?,
            status: row.status.parse::<ArticleStatus>()?,
            title: row.title,
            content: row.content,
            meta_description: row.meta_description,
            word_count: row.word_count,
            generated_at: row.generated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    page_id: i64,
    status: String,
    title: Option<String>,
    meta_description: Option<String>,
    word_count: Option<i64>,
    generated_at: Option<DateTime<Utc>>,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            page_id: PageId::new(row.page_id)?,
            status: row.status.parse::<ArticleStatus>()?,
            title: row.title,
            meta_description: row.meta_description,
            word_count: row.word_count,
            generated_at: row.generated_at,
        })
    }
}

#[async_trait]
impl ArticleReadRepository for MySqlArticleRepository {
    async fn find_by_page_id(&self, page_id: PageId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, page_id, status, title, content, meta_description, word_count, generated_at
             FROM articles
             WHERE page_id = ?",
        )
        .bind(i64::from(page_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_summaries(
        &self,
        status: Option<ArticleStatus>,
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
            "SELECT id, page_id, status, title, meta_description, word_count, generated_at
             FROM articles",
        );

        if let Some(status) = status {
            builder.push(" WHERE status = ");
            builder.push_bind(status.as_str());
        }

        builder.push(" ORDER BY generated_at DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }
}
