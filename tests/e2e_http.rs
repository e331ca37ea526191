// tests/e2e_http.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

mod support;

use support::builders::{ArticleBuilder, PageBuilder};
use support::helpers::make_router;
use support::mocks::{InMemoryArticleRepo, InMemoryPageRepo, UnavailablePageRepo};

fn seeded_router() -> axum::Router {
    let articles = InMemoryArticleRepo::new(vec![
        ArticleBuilder::new()
            .id(1)
            .page_id(897)
            .generated_at("2024-01-01T00:00:00Z")
            .build(),
        ArticleBuilder::new()
            .id(2)
            .page_id(897)
            .draft()
            .generated_at("2023-06-01T00:00:00Z")
            .build(),
    ]);
    let pages = InMemoryPageRepo::new(vec![PageBuilder::new()
        .id(897)
        .url_slug("/izu/atami/")
        .build()]);
    make_router(Arc::new(articles), Arc::new(pages))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn e2e_health_returns_ok() {
    let (status, json) = get_json(seeded_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

/// draft が published より優先されて返ることを確認する
#[tokio::test]
async fn e2e_article_by_page_id_returns_draft_winner() {
    let (status, json) = get_json(seeded_router(), "/api/v1/article?id=897").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 2);
    assert_eq!(json["status"], "draft");
    // By-id resolution carries no page_info.
    assert!(json.get("page_info").is_none());
}

#[tokio::test]
async fn e2e_article_with_bad_id_returns_400() {
    let (status, json) = get_json(seeded_router(), "/api/v1/article?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidRequest");
}

#[tokio::test]
async fn e2e_article_with_missing_id_returns_400() {
    let (status, json) = get_json(seeded_router(), "/api/v1/article").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidRequest");
}

#[tokio::test]
async fn e2e_article_for_unknown_page_returns_404() {
    let (status, json) = get_json(seeded_router(), "/api/v1/article?id=99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NotFound");
}

#[tokio::test]
async fn e2e_article_by_slug_includes_page_info() {
    let (status, json) = get_json(seeded_router(), "/api/v1/article-by-slug?slug=izu/atami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 2);
    assert_eq!(json["slug"], "izu/atami");
    assert_eq!(json["page_info"]["page_id"], 897);
    assert_eq!(json["page_info"]["url_slug"], "/izu/atami/");
}

/// 静的ルート用スラッグはコンテンツとして解決されない
#[tokio::test]
async fn e2e_reserved_slug_returns_404() {
    let (status, json) = get_json(seeded_router(), "/api/v1/article-by-slug?slug=company").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NotFound");
}

#[tokio::test]
async fn e2e_duplicate_slug_returns_409() {
    let articles = InMemoryArticleRepo::new(vec![]);
    let pages = InMemoryPageRepo::new(vec![
        PageBuilder::new().id(1).url_slug("/izu/atami/").build(),
        PageBuilder::new().id(2).url_slug("izu/atami").build(),
    ]);
    let app = make_router(Arc::new(articles), Arc::new(pages));

    let (status, json) = get_json(app, "/api/v1/article-by-slug?slug=izu/atami").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "AmbiguousSlug");
}

/// ストア障害は一様に 503 で返り、内部詳細は漏れない
#[tokio::test]
async fn e2e_store_failure_returns_503_without_details() {
    let articles = InMemoryArticleRepo::new(vec![]);
    let app = make_router(Arc::new(articles), Arc::new(UnavailablePageRepo));

    let (status, json) = get_json(app, "/api/v1/article-by-slug?slug=izu/atami").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "StoreUnavailable");
    assert_eq!(json["message"], "content store unavailable");
}

#[tokio::test]
async fn e2e_article_list_filters_by_status() {
    let (status, json) = get_json(seeded_router(), "/api/v1/articles?status=draft").await;
    assert_eq!(status, StatusCode::OK);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 2);
    // Listing rows carry no content body.
    assert!(items[0].get("content").is_none());
}

#[tokio::test]
async fn e2e_slug_index_returns_count_and_rows() {
    use onsen_guide::domain::page::{LinkedSlug, PageId};

    let articles = InMemoryArticleRepo::new(vec![]);
    let pages = InMemoryPageRepo::new(vec![]).with_linked(vec![LinkedSlug {
        page_id: PageId::new(897).unwrap(),
        url_slug: "/izu/atami/".into(),
        page_title: Some("熱海温泉ガイド".into()),
        article_title: Some("熱海温泉の過ごし方".into()),
    }]);
    let app = make_router(Arc::new(articles), Arc::new(pages));

    let (status, json) = get_json(app, "/api/v1/slugs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["slugs"][0]["page_id"], 897);
}

/// generated_at が NULL の行でも 200 で記事が返る
#[tokio::test]
async fn e2e_article_with_null_timestamp_is_served() {
    let articles = InMemoryArticleRepo::new(vec![ArticleBuilder::new()
        .id(7)
        .page_id(12)
        .without_generated_at()
        .build()]);
    let pages = InMemoryPageRepo::new(vec![]);
    let app = make_router(Arc::new(articles), Arc::new(pages));

    let (status, json) = get_json(app, "/api/v1/article?id=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 7);
    assert_eq!(json["generated_at"], Value::Null);
}

#[tokio::test]
async fn e2e_pages_for_generation_lists_pages_without_articles() {
    use onsen_guide::domain::page::{PageAwaitingArticle, PageId};

    let articles = InMemoryArticleRepo::new(vec![]);
    let pages = InMemoryPageRepo::new(vec![]).with_awaiting(vec![PageAwaitingArticle {
        page_id: PageId::new(31).unwrap(),
        url_slug: "/kusatsu/yubatake/".into(),
        page_title: Some("草津温泉ガイド".into()),
        area_name: Some("草津".into()),
        theme_name: None,
    }]);
    let app = make_router(Arc::new(articles), Arc::new(pages));

    let (status, json) = get_json(app, "/api/v1/pages-for-generation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["pages"][0]["page_id"], 31);
    assert_eq!(json["pages"][0]["url_slug"], "/kusatsu/yubatake/");
}

#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let (status, json) = get_json(seeded_router(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/v1/article-by-slug"].is_object());
}
