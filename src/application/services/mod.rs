// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{articles::ArticleQueryService, pages::PageQueryService},
    domain::{article::ArticleReadRepository, page::PageReadRepository},
};

/// All query services, constructed once at startup from injected
/// repositories. There is no hidden global store state; everything the
/// services reach is passed in here.
pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        page_repo: Arc<dyn PageReadRepository>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&page_repo),
        ));
        let page_queries = Arc::new(PageQueryService::new(Arc::clone(&page_repo)));

        Self {
            article_queries,
            page_queries,
        }
    }
}
