// tests/support/helpers.rs
use std::sync::Arc;

use onsen_guide::application::services::ApplicationServices;
use onsen_guide::domain::article::ArticleReadRepository;
use onsen_guide::domain::page::PageReadRepository;
use onsen_guide::presentation::http::{routes::build_router, state::HttpState};

pub fn make_services(
    article_repo: Arc<dyn ArticleReadRepository>,
    page_repo: Arc<dyn PageReadRepository>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(article_repo, page_repo))
}

pub fn make_router(
    article_repo: Arc<dyn ArticleReadRepository>,
    page_repo: Arc<dyn PageReadRepository>,
) -> axum::Router {
    let services = make_services(article_repo, page_repo);
    build_router(HttpState { services })
}
