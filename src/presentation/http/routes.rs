// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{answers, questions, tags, users},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .expose_headers([axum::http::header::LOCATION])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/tag", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/tag/{name}",
            get(tags::get_tag)
                .head(tags::tag_exists)
                .put(tags::update_tag)
                .delete(tags::delete_tag),
        )
        .route("/user", get(users::list_users).post(users::create_user))
        .route(
            "/user/{id}",
            get(users::get_user).head(users::user_exists),
        )
        .route("/user/{id}/questions", get(users::questions_asked))
        .route("/user/{id}/answered", get(users::questions_answered))
        .route(
            "/question",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/question/search", get(questions::search_questions))
        .route("/question/tagged/{tag}", get(questions::questions_by_tag))
        .route(
            "/question/{id}",
            get(questions::get_question)
                .head(questions::question_exists)
                .put(questions::update_question)
                .patch(questions::patch_question)
                .delete(questions::delete_question),
        )
        .route(
            "/question/{id}/answers",
            get(answers::list_answers).post(answers::create_answer),
        )
        .route(
            "/answer/{id}",
            get(answers::get_answer)
                .patch(answers::patch_answer)
                .delete(answers::delete_answer),
        )
        .route("/answer/{id}/choose", post(answers::choose_answer))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// `*` anywhere in the list allows every origin.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
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
    axum::Json(StatusResponse::new("ok"))
}
