mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use shortlink::api::handlers::redirect_handler;

fn redirect_app(state: shortlink::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_link(&pool, "target1", "https://example.com/target").await;

    let response = server.get("/target1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_click(pool: PgPool) {
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_link(&pool, "count1", "https://example.com").await;

    assert_eq!(common::fetch_clicks(&pool, "count1").await, 0);
    assert!(common::fetch_last_clicked_at(&pool, "count1").await.is_none());

    server.get("/count1").await;

    assert_eq!(common::fetch_clicks(&pool, "count1").await, 1);
    assert!(common::fetch_last_clicked_at(&pool, "count1").await.is_some());

    server.get("/count1").await;

    assert_eq!(common::fetch_clicks(&pool, "count1").await, 2);
}

#[sqlx::test]
async fn test_redirect_case_insensitive(pool: PgPool) {
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_link(&pool, "MixedUp", "https://example.com/mixed").await;

    let response = server.get("/mixedup").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/mixed");
    assert_eq!(common::fetch_clicks(&pool, "MixedUp").await, 1);
}

#[sqlx::test]
async fn test_redirect_not_found_returns_html(pool: PgPool) {
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_link(&pool, "exists1", "https://example.com").await;

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let content_type = response.header("content-type");
    let content_type = content_type.to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(response.text().contains("Link not found"));

    // No side effects on other rows.
    assert_eq!(common::fetch_clicks(&pool, "exists1").await, 0);
}
