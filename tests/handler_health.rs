mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

use shortly::api::handlers::health_handler;

fn test_app(state: shortly::AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_health_reports_healthy(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[sqlx::test]
async fn test_health_reports_degraded_when_database_is_down(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    // Closing the pool makes the connectivity check fail.
    pool.close().await;

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
    assert!(body["checks"]["database"]["message"].is_string());
}
