// src/domain/page/entity.rs
use crate::domain::page::value_objects::PageId;

/// A content-management record for one destination/topic. Rows are
/// created by an out-of-scope editorial process; this system only
/// reads them.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    /// Stored verbatim; may carry a leading and/or trailing `/`.
    pub url_slug: String,
    pub page_title: Option<String>,
    pub region_name: Option<String>,
    pub theme_title: Option<String>,
    pub meta_description: Option<String>,
    pub hero_image_url: Option<String>,
}

/// One row of the slug index: a page that has at least one article.
#[derive(Debug, Clone)]
pub struct LinkedSlug {
    pub page_id: PageId,
    pub url_slug: String,
    pub page_title: Option<String>,
    pub article_title: Option<String>,
}

/// A page with a slug but no article yet, awaiting the generation
/// pipeline.
#[derive(Debug, Clone)]
pub struct PageAwaitingArticle {
    pub page_id: PageId,
    pub url_slug: String,
    pub page_title: Option<String>,
    pub area_name: Option<String>,
    pub theme_name: Option<String>,
}
