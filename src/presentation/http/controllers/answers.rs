// src/presentation/http/controllers/answers.rs
use crate::application::{
    commands::answers::{CreateAnswerCommand, PatchAnswerCommand},
    dto::{AnswerDto, VoteDto},
};
use crate::presentation::http::controllers::{answer_id, created, question_id};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestContext;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, response::Response};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnswerRequest {
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchAnswerRequest {
    pub body: Option<String>,
    pub votes: Option<Vec<VoteDto>>,
}

#[utoipa::path(
    get,
    path = "/question/{id}/answers",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Answers in creation order.", body = [AnswerDto]),
        (status = 404, description = "No such question.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn list_answers(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<AnswerDto>>> {
    let id = question_id(id)?;
    state
        .services
        .answer_queries
        .list_answers(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/question/{id}/answers",
    params(("id" = i64, Path, description = "Question id")),
    request_body = CreateAnswerRequest,
    responses(
        (status = 201, description = "Answer created; `Location` is its `/answer/{id}` URL.", body = AnswerDto),
        (status = 400, description = "Empty body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such question or author.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn create_answer(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Json(payload): Json<CreateAnswerRequest>,
) -> HttpResult<Response> {
    let id = question_id(id)?;
    let command = CreateAnswerCommand {
        author: payload.author,
        body: payload.body,
    };

    let answer = state
        .services
        .answer_commands
        .add_answer(id, command)
        .await
        .into_http()?;

    let location = ctx.url_for(&format!("/answer/{}", answer.id));
    Ok(created(location, answer))
}

#[utoipa::path(
    get,
    path = "/answer/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 200, description = "The answer.", body = AnswerDto),
        (status = 404, description = "No such answer.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn get_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<AnswerDto>> {
    let id = answer_id(id)?;
    state
        .services
        .answer_queries
        .get_answer(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/answer/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    request_body = PatchAnswerRequest,
    responses(
        (status = 200, description = "Answer with the supplied fields applied.", body = AnswerDto),
        (status = 404, description = "No such answer or voter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn patch_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PatchAnswerRequest>,
) -> HttpResult<Json<AnswerDto>> {
    let id = answer_id(id)?;
    let command = PatchAnswerCommand {
        body: payload.body,
        votes: payload.votes,
    };

    state
        .services
        .answer_commands
        .patch_answer(id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/answer/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer deleted.", body = StatusResponse),
        (status = 404, description = "No such answer.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn delete_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    let id = answer_id(id)?;
    state
        .services
        .answer_commands
        .delete_answer(id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

#[utoipa::path(
    post,
    path = "/answer/{id}/choose",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer marked as chosen; siblings cleared.", body = AnswerDto),
        (status = 404, description = "No such answer.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn choose_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<AnswerDto>> {
    let id = answer_id(id)?;
    state
        .services
        .answer_commands
        .choose_answer(id)
        .await
        .into_http()
        .map(Json)
}
