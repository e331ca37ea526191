use crate::domain::page::{LinkedSlug, Page, PageAwaitingArticle};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageInfoDto {
    pub page_id: i64,
    pub url_slug: String,
    pub page_title: Option<String>,
    pub region_name: Option<String>,
    pub theme_title: Option<String>,
    pub meta_description: Option<String>,
    pub hero_image_url: Option<String>,
}

impl From<Page> for PageInfoDto {
    fn from(page: Page) -> Self {
        Self {
            page_id: page.id.into(),
            url_slug: page.url_slug,
            page_title: page.page_title,
            region_name: page.region_name,
            theme_title: page.theme_title,
            meta_description: page.meta_description,
            hero_image_url: page.hero_image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkedSlugDto {
    pub page_id: i64,
    pub url_slug: String,
    pub page_title: Option<String>,
    pub article_title: Option<String>,
}

impl From<LinkedSlug> for LinkedSlugDto {
    fn from(row: LinkedSlug) -> Self {
        Self {
            page_id: row.page_id.into(),
            url_slug: row.url_slug,
            page_title: row.page_title,
            article_title: row.article_title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugIndexDto {
    pub count: usize,
    pub slugs: Vec<LinkedSlugDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageAwaitingArticleDto {
    pub page_id: i64,
    pub url_slug: String,
    pub page_title: Option<String>,
    pub area_name: Option<String>,
    pub theme_name: Option<String>,
}

impl From<PageAwaitingArticle> for PageAwaitingArticleDto {
    fn from(row: PageAwaitingArticle) -> Self {
        Self {
            page_id: row.page_id.into(),
            url_slug: row.url_slug,
            page_title: row.page_title,
            area_name: row.area_name,
            theme_name: row.theme_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AwaitingArticleIndexDto {
    pub count: usize,
    pub message: String,
    pub pages: Vec<PageAwaitingArticleDto>,
}
