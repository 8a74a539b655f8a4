#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlink::application::services::LinkService;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://sho.rt";

pub fn create_test_state(pool: PgPool) -> AppState {
    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(link_repository));

    AppState::new(link_service, TEST_BASE_URL.to_string())
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a link with a creation time in the past, for ordering tests.
pub async fn create_aged_link(pool: &PgPool, code: &str, url: &str, hours_ago: i32) {
    sqlx::query(
        "INSERT INTO links (code, url, created_at) \
         VALUES ($1, $2, NOW() - make_interval(hours => $3))",
    )
    .bind(code)
    .bind(url)
    .bind(hours_ago)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn fetch_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE LOWER(code) = LOWER($1)")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_last_clicked_at(pool: &PgPool, code: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT last_clicked_at FROM links WHERE LOWER(code) = LOWER($1)")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
