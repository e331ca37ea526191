use crate::application::dto::pages::PageInfoDto;
use crate::domain::article::{Article, ArticleSummary};
use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The single authoritative article for a page, plus the matched page's
/// display fields when the lookup came in by slug.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedArticleDto {
    pub id: i64,
    pub page_id: i64,
    pub status: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub word_count: Option<i64>,
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfoDto>,
}

impl From<Article> for ResolvedArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            page_id: article.page_id.into(),
            status: article.status.as_str().to_string(),
            title: article.title,
            content: article.content,
            meta_description: article.meta_description,
            word_count: article.word_count,
            generated_at: article.generated_at,
            slug: None,
            page_info: None,
        }
    }
}

impl ResolvedArticleDto {
    pub fn with_page(article: Article, requested_slug: &str, page: Page) -> Self {
        let mut dto = Self::from(article);
        dto.slug = Some(requested_slug.to_string());
        dto.page_info = Some(page.into());
        dto
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub page_id: i64,
    pub status: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub word_count: Option<i64>,
    pub generated_at: Option<DateTime<Utc>>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.into(),
            page_id: summary.page_id.into(),
            status: summary.status.as_str().to_string(),
            title: summary.title,
            meta_description: summary.meta_description,
            word_count: summary.word_count,
            generated_at: summary.generated_at,
        }
    }
}
