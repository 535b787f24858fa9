#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use shortly::application::services::ShortenerService;
use shortly::infrastructure::persistence::PgUrlRepository;
use shortly::state::AppState;
use shortly::utils::code_generator::CODE_LENGTH;

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgUrlRepository::new(pool.clone()));
    let shortener = Arc::new(ShortenerService::new(repository, CODE_LENGTH));

    AppState {
        db: pool,
        shortener,
    }
}

pub async fn create_test_record(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_code) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn access_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT access_count FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn record_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
