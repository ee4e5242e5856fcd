// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::RegisterUserCommand,
    dto::{QuestionDto, UserDto},
};
use crate::domain::user::UserId;
use crate::presentation::http::controllers::{created, exists_status};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestContext;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode, response::Response};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub id: String,
    /// Defaults to `id`.
    #[serde(default)]
    pub username: Option<String>,
}

#[utoipa::path(
    get,
    path = "/user",
    responses((status = 200, description = "All users.", body = [UserDto])),
    tag = "Users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .get_all_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created.", body = UserDto),
        (status = 400, description = "Invalid user id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "User already exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Response> {
    let command = RegisterUserCommand {
        id: payload.id,
        username: payload.username,
    };

    let user = state
        .services
        .user_commands
        .add_user(command)
        .await
        .into_http()?;

    Ok(created(ctx.location_for(&user.id), user))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user.", body = UserDto),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    let id = UserId::new(id).into_http()?;
    state
        .services
        .user_queries
        .get_user(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    head,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user exists."),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn user_exists(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = UserId::new(id).into_http()?;
    let exists = state
        .services
        .user_queries
        .does_user_exist(id)
        .await
        .into_http()?;
    Ok(exists_status(exists))
}

#[utoipa::path(
    get,
    path = "/user/{id}/questions",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Questions asked by the user.", body = [QuestionDto]),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn questions_asked(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    let id = UserId::new(id).into_http()?;
    state
        .services
        .question_queries
        .find_questions_asked_by_user(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/user/{id}/answered",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Questions the user has answered.", body = [QuestionDto]),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn questions_answered(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    let id = UserId::new(id).into_http()?;
    state
        .services
        .question_queries
        .find_questions_answered_by_user(id)
        .await
        .into_http()
        .map(Json)
}
