use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;
use crate::domain::page::PageReadRepository;

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) page_repo: Arc<dyn PageReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        page_repo: Arc<dyn PageReadRepository>,
    ) -> Self {
        Self {
            article_repo,
            page_repo,
        }
    }
}
