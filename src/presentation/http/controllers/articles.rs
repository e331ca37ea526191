// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleSummaryDto, ResolvedArticleDto},
    error::ApplicationError,
    queries::articles::{ListArticlesQuery, ResolveByPageIdQuery, ResolveBySlugQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ArticleByIdParams {
    /// Kept as a string so a malformed id is our 400, not a routing
    /// rejection.
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleBySlugParams {
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/article",
    params(("id" = String, Query, description = "Numeric page id.")),
    responses(
        (status = 200, description = "Current article for the page.", body = ResolvedArticleDto),
        (status = 400, description = "Malformed or missing page id."),
        (status = 404, description = "No article for the page."),
        (status = 503, description = "Content store unavailable.")
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleByIdParams>,
) -> HttpResult<Json<ResolvedArticleDto>> {
    let Some(raw_id) = params.id else {
        return Err(HttpError::from_error(ApplicationError::invalid_request(
            "id query parameter is required",
        )));
    };

    state
        .services
        .article_queries
        .resolve_by_page_id(ResolveByPageIdQuery { raw_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/article-by-slug",
    params(("slug" = String, Query, description = "Percent-decoded page slug, segments joined with '/'.")),
    responses(
        (status = 200, description = "Current article plus page info.", body = ResolvedArticleDto),
        (status = 400, description = "Missing or empty slug."),
        (status = 404, description = "No page or article for the slug."),
        (status = 409, description = "Slug matches more than one page."),
        (status = 503, description = "Content store unavailable.")
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleBySlugParams>,
) -> HttpResult<Json<ResolvedArticleDto>> {
    let Some(slug) = params.slug else {
        return Err(HttpError::from_error(ApplicationError::invalid_request(
            "slug query parameter is required",
        )));
    };

    state
        .services
        .article_queries
        .resolve_by_slug(ResolveBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(
        ("status" = Option<String>, Query, description = "Filter to 'draft' or 'published'."),
        ("limit" = Option<u32>, Query, description = "Max rows, clamped to 1..=100.")
    ),
    responses(
        (status = 200, description = "Article summaries, newest first.", body = [ArticleSummaryDto]),
        (status = 400, description = "Unknown status filter."),
        (status = 503, description = "Content store unavailable.")
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            status: params.status,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
