// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::page::value_objects::PageId;
use chrono::{DateTime, Utc};

/// A generated-content record tied to a Page. Rows are produced by an
/// out-of-scope generation pipeline and never mutated here; the payload
/// fields pass through to rendering unmodified.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub page_id: PageId,
    pub status: ArticleStatus,
    pub title: Option<String>,
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub word_count: Option<i64>,
    /// Nullable in the store; a missing timestamp ranks as oldest.
    pub generated_at: Option<DateTime<Utc>>,
}

/// Listing row without the content body.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub page_id: PageId,
    pub status: ArticleStatus,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub word_count: Option<i64>,
    pub generated_at: Option<DateTime<Utc>>,
}
