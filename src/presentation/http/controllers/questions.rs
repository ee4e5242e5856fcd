// src/presentation/http/controllers/questions.rs
use crate::application::{
    commands::questions::{CreateQuestionCommand, PatchQuestionCommand, UpdateQuestionCommand},
    dto::{QuestionDto, VoteDto},
    queries::questions::{DEFAULT_PAGE_SIZE, ListQuestionsQuery},
};
use crate::domain::tag::TagName;
use crate::presentation::http::controllers::{created, exists_status, question_id};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestContext;
use crate::presentation::http::openapi::{QuestionPage, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleSearchParams {
    /// Case-insensitive fragment of the title.
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub votes: Vec<VoteDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuestionRequest {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub modified_by: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub votes: Vec<VoteDto>,
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Ignored; creation time never changes.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchQuestionRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub modified_by: Option<String>,
    pub tags: Option<Vec<String>>,
    pub votes: Option<Vec<VoteDto>>,
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Ignored; creation time never changes.
    pub created_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/question",
    params(QuestionListParams),
    responses((status = 200, description = "One page of questions ordered by id.", body = QuestionPage)),
    tag = "Questions"
)]
pub async fn list_questions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<QuestionListParams>,
) -> HttpResult<Json<QuestionPage>> {
    let query = ListQuestionsQuery {
        page: params.page,
        page_size: params.page_size,
    };

    state
        .services
        .question_queries
        .get_all_questions(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/question",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created.", body = QuestionDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown tag or user referenced.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn create_question(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Json(payload): Json<CreateQuestionRequest>,
) -> HttpResult<Response> {
    let command = CreateQuestionCommand {
        title: payload.title,
        body: payload.body,
        created_by: payload.created_by,
        tags: payload.tags,
        votes: payload.votes,
    };

    let question = state
        .services
        .question_commands
        .add_question(command)
        .await
        .into_http()?;

    Ok(created(ctx.location_for(question.id), question))
}

#[utoipa::path(
    get,
    path = "/question/search",
    params(TitleSearchParams),
    responses((status = 200, description = "Questions whose title contains the fragment.", body = [QuestionDto])),
    tag = "Questions"
)]
pub async fn search_questions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TitleSearchParams>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    state
        .services
        .question_queries
        .find_questions_by_title(&params.title)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/question/tagged/{tag}",
    params(("tag" = String, Path, description = "Tag name")),
    responses(
        (status = 200, description = "Questions carrying the tag.", body = [QuestionDto]),
        (status = 404, description = "No such tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn questions_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    let tag = TagName::new(tag).into_http()?;
    state
        .services
        .question_queries
        .find_questions_by_tag(tag)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question.", body = QuestionDto),
        (status = 404, description = "No such question.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn get_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<QuestionDto>> {
    let id = question_id(id)?;
    state
        .services
        .question_queries
        .get_question(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    head,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question exists."),
        (status = 404, description = "No such question.")
    ),
    tag = "Questions"
)]
pub async fn question_exists(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    let id = question_id(id)?;
    let exists = state
        .services
        .question_queries
        .does_question_exist(id)
        .await
        .into_http()?;
    Ok(exists_status(exists))
}

#[utoipa::path(
    put,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question replaced; creation metadata kept.", body = QuestionDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such question, tag or user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn update_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> HttpResult<Json<QuestionDto>> {
    let id = question_id(id)?;
    let command = UpdateQuestionCommand {
        title: payload.title,
        body: payload.body,
        modified_by: payload.modified_by,
        tags: payload.tags,
        votes: payload.votes,
        last_updated_at: payload.last_updated_at,
        created_at: payload.created_at,
    };

    state
        .services
        .question_commands
        .update_question(id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    request_body = PatchQuestionRequest,
    responses(
        (status = 200, description = "Question with the supplied fields applied.", body = QuestionDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such question, tag or user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn patch_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PatchQuestionRequest>,
) -> HttpResult<Json<QuestionDto>> {
    let id = question_id(id)?;
    let command = PatchQuestionCommand {
        title: payload.title,
        body: payload.body,
        modified_by: payload.modified_by,
        tags: payload.tags,
        votes: payload.votes,
        last_updated_at: payload.last_updated_at,
        created_at: payload.created_at,
    };

    state
        .services
        .question_commands
        .patch_question(id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted with its answers and votes.", body = StatusResponse),
        (status = 404, description = "No such question.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn delete_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    let id = question_id(id)?;
    state
        .services
        .question_commands
        .delete_question(id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
