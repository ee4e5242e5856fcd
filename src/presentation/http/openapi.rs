// src/presentation/http/openapi.rs
use crate::application::dto::{PaginatedResult, QuestionDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// One page of questions plus the counters needed to fetch the next one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionPage {
    pub items: Vec<QuestionDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

impl From<PaginatedResult<QuestionDto>> for QuestionPage {
    fn from(page: PaginatedResult<QuestionDto>) -> Self {
        let has_more = page.has_more();
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::tags::get_tag,
        crate::presentation::http::controllers::tags::tag_exists,
        crate::presentation::http::controllers::tags::update_tag,
        crate::presentation::http::controllers::tags::delete_tag,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::user_exists,
        crate::presentation::http::controllers::users::questions_asked,
        crate::presentation::http::controllers::users::questions_answered,
        crate::presentation::http::controllers::questions::list_questions,
        crate::presentation::http::controllers::questions::create_question,
        crate::presentation::http::controllers::questions::search_questions,
        crate::presentation::http::controllers::questions::questions_by_tag,
        crate::presentation::http::controllers::questions::get_question,
        crate::presentation::http::controllers::questions::question_exists,
        crate::presentation::http::controllers::questions::update_question,
        crate::presentation::http::controllers::questions::patch_question,
        crate::presentation::http::controllers::questions::delete_question,
        crate::presentation::http::controllers::answers::list_answers,
        crate::presentation::http::controllers::answers::create_answer,
        crate::presentation::http::controllers::answers::get_answer,
        crate::presentation::http::controllers::answers::patch_answer,
        crate::presentation::http::controllers::answers::delete_answer,
        crate::presentation::http::controllers::answers::choose_answer,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            QuestionPage,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::tags::CreateTagRequest,
            crate::presentation::http::controllers::tags::UpdateTagRequest,
            crate::presentation::http::controllers::users::CreateUserRequest,
            crate::presentation::http::controllers::questions::CreateQuestionRequest,
            crate::presentation::http::controllers::questions::UpdateQuestionRequest,
            crate::presentation::http::controllers::questions::PatchQuestionRequest,
            crate::presentation::http::controllers::answers::CreateAnswerRequest,
            crate::presentation::http::controllers::answers::PatchAnswerRequest,
            crate::application::dto::TagDto,
            crate::application::dto::UserDto,
            crate::application::dto::QuestionDto,
            crate::application::dto::AnswerDto,
            crate::application::dto::VoteDto,
            crate::domain::vote::VoteType
        )
    ),
    tags(
        (name = "Tags", description = "Tag catalogue"),
        (name = "Users", description = "Users and their activity"),
        (name = "Questions", description = "Questions, search and voting"),
        (name = "Answers", description = "Answers and accepted-answer selection"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Tullamore Q&A API",
        description = "Questions, answers, tags and votes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        if let Ok(url) = env::var("PUBLIC_BASE_URL") {
            let sanitized = url.trim().trim_end_matches('/').to_string();
            if !sanitized.is_empty() {
                servers.push(Server::new(sanitized));
            }
        }

        if servers.is_empty() {
            servers.push(Server::new("http://localhost:8080"));
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
        .route("/", get(|| async { Redirect::temporary("/redoc") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
