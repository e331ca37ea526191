// src/presentation/http/routes.rs
use crate::presentation::http::openapi::{self, StatusResponse};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::controllers::{articles, pages};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    // The API is consumed cross-origin by the rendering front end;
    // read-only, so GET/OPTIONS from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/article", get(articles::get_article))
        .route(
            "/api/v1/article-by-slug",
            get(articles::get_article_by_slug),
        )
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/api/v1/slugs", get(pages::list_slugs))
        .route(
            "/api/v1/pages-for-generation",
            get(pages::list_pages_for_generation),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
