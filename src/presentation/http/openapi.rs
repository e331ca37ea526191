// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::application::dto::{
    ArticleSummaryDto, AwaitingArticleIndexDto, LinkedSlugDto, PageAwaitingArticleDto, PageInfoDto,
    ResolvedArticleDto, SlugIndexDto,
};
use crate::presentation::http::{controllers, error::ErrorBody, routes};

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "onsen_guide content API",
        description = "Read-only article resolution for the travel-guide site."
    ),
    paths(
        routes::health,
        controllers::articles::get_article,
        controllers::articles::get_article_by_slug,
        controllers::articles::list_articles,
        controllers::pages::list_slugs,
        controllers::pages::list_pages_for_generation,
    ),
    components(schemas(
        StatusResponse,
        ErrorBody,
        ResolvedArticleDto,
        ArticleSummaryDto,
        PageInfoDto,
        LinkedSlugDto,
        SlugIndexDto,
        PageAwaitingArticleDto,
        AwaitingArticleIndexDto,
    )),
    tags(
        (name = "Articles", description = "Slug/page-id article resolution."),
        (name = "Pages", description = "Page slug index."),
        (name = "System", description = "Health and diagnostics.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
