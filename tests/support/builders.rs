// tests/support/builders.rs
use chrono::{DateTime, Utc};

use onsen_guide::domain::article::{Article, ArticleId, ArticleStatus};
use onsen_guide::domain::page::{Page, PageId};

pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

pub struct ArticleBuilder {
    id: i64,
    page_id: i64,
    status: ArticleStatus,
    title: Option<String>,
    content: Option<String>,
    generated_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            page_id: 897,
            status: ArticleStatus::Published,
            title: Some("熱海温泉の過ごし方".into()),
            content: Some("# 熱海\n\n本文".into()),
            generated_at: Some(ts("2024-01-01T00:00:00Z")),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn page_id(mut self, page_id: i64) -> Self {
        self.page_id = page_id;
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = ArticleStatus::Draft;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn generated_at(mut self, value: &str) -> Self {
        self.generated_at = Some(ts(value));
        self
    }

    pub fn without_generated_at(mut self) -> Self {
        self.generated_at = None;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            page_id: PageId::new(self.page_id).unwrap(),
            status: self.status,
            title: self.title,
            content: self.content,
            meta_description: None,
            word_count: Some(3200),
            generated_at: self.generated_at,
        }
    }
}

pub struct PageBuilder {
    id: i64,
    url_slug: String,
    page_title: Option<String>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            id: 897,
            url_slug: "/izu/atami/".into(),
            page_title: Some("熱海温泉ガイド".into()),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn url_slug(mut self, slug: impl Into<String>) -> Self {
        self.url_slug = slug.into();
        self
    }

    pub fn build(self) -> Page {
        Page {
            id: PageId::new(self.id).unwrap(),
            url_slug: self.url_slug,
            page_title: self.page_title,
            region_name: Some("熱海温泉".into()),
            theme_title: None,
            meta_description: None,
            hero_image_url: None,
        }
    }
}
