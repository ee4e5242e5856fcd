// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::util::ServiceExt as _;
use tullamore_qa::application::{ports::time::Clock, services::ApplicationServices};
use tullamore_qa::infrastructure::{
    database,
    repositories::{
        SqliteAnswerRepository, SqliteQuestionReadRepository, SqliteQuestionWriteRepository,
        SqliteTagRepository, SqliteUserRepository,
    },
};
use tullamore_qa::presentation::http::{routes::build_router, state::HttpState};

/// Fresh, migrated in-memory database. One connection keeps it alive.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

pub fn build_services(pool: &SqlitePool, clock: Arc<dyn Clock>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(SqliteTagRepository::new(pool.clone())),
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteQuestionWriteRepository::new(pool.clone())),
        Arc::new(SqliteQuestionReadRepository::new(pool.clone())),
        Arc::new(SqliteAnswerRepository::new(pool.clone())),
        clock,
    ))
}

/// Fresh database with services and the clock driving them.
pub struct SqliteFixture {
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
    pub clock: Arc<FixedClock>,
}

pub async fn sqlite_fixture() -> SqliteFixture {
    let pool = sqlite_pool().await;
    let clock = Arc::new(FixedClock::new());
    let services = build_services(&pool, clock.clone());
    SqliteFixture {
        pool,
        services,
        clock,
    }
}

pub async fn make_test_router() -> axum::Router {
    make_test_router_with_base_url(None).await
}

pub async fn make_test_router_with_base_url(public_base_url: Option<&str>) -> axum::Router {
    let services = sqlite_fixture().await.services;
    let state = HttpState {
        services,
        public_base_url: public_base_url.map(str::to_string),
    };
    build_router(state, &["*".to_string()])
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|value| value.to_str().ok())
    }
}

/// Sends one request through the router and decodes any JSON body.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    json: Option<Value>,
) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match json {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let (parts, body_stream) = response.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers: parts.headers,
        body,
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "unexpected body: {}", resp.body);
    let ct = resp
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let err_field = resp.body.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = resp.body.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
