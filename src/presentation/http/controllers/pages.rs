// src/presentation/http/controllers/pages.rs
use crate::application::{
    dto::{AwaitingArticleIndexDto, SlugIndexDto},
    queries::pages::{ListAwaitingArticleQuery, ListLinkedSlugsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SlugIndexParams {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs",
    params(("limit" = Option<u32>, Query, description = "Max rows, clamped to 1..=100, default 20.")),
    responses(
        (status = 200, description = "Pages that already have articles.", body = SlugIndexDto),
        (status = 503, description = "Content store unavailable.")
    ),
    tag = "Pages"
)]
pub async fn list_slugs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugIndexParams>,
) -> HttpResult<Json<SlugIndexDto>> {
    state
        .services
        .page_queries
        .list_linked_slugs(ListLinkedSlugsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages-for-generation",
    params(("limit" = Option<u32>, Query, description = "Max rows, clamped to 1..=100, default 20.")),
    responses(
        (status = 200, description = "Pages with a slug but no article yet.", body = AwaitingArticleIndexDto),
        (status = 503, description = "Content store unavailable.")
    ),
    tag = "Pages"
)]
pub async fn list_pages_for_generation(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugIndexParams>,
) -> HttpResult<Json<AwaitingArticleIndexDto>> {
    state
        .services
        .page_queries
        .list_awaiting_article(ListAwaitingArticleQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
