// src/presentation/http/controllers/tags.rs
use crate::application::{
    commands::tags::{AddTagCommand, UpdateTagCommand},
    dto::TagDto,
};
use crate::domain::tag::TagName;
use crate::presentation::http::controllers::{created, exists_status};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestContext;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode, response::Response};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTagRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/tag",
    responses(
        (status = 200, description = "All tags ordered by name.", body = [TagDto])
    ),
    tag = "Tags"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .tag_queries
        .get_all_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/tag",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created; `Location` points at it.", body = TagDto),
        (status = 400, description = "Invalid tag name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Tag already exists; `Location` points at the existing tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<Response> {
    let name = payload.name.clone();
    let command = AddTagCommand {
        name: payload.name,
        description: payload.description,
    };

    match state.services.tag_commands.add_tag(command).await {
        Ok(tag) => Ok(created(ctx.location_for(&tag.name), tag)),
        Err(err) if err.is_conflict() => {
            Err(HttpError::from_error(err).with_location(ctx.location_for(name)))
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

#[utoipa::path(
    get,
    path = "/tag/{name}",
    params(("name" = String, Path, description = "Tag name")),
    responses(
        (status = 200, description = "The tag.", body = TagDto),
        (status = 404, description = "No such tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
) -> HttpResult<Json<TagDto>> {
    let name = TagName::new(name).into_http()?;
    state
        .services
        .tag_queries
        .get_tag(name)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    head,
    path = "/tag/{name}",
    params(("name" = String, Path, description = "Tag name")),
    responses(
        (status = 200, description = "The tag exists."),
        (status = 404, description = "No such tag.")
    ),
    tag = "Tags"
)]
pub async fn tag_exists(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
) -> HttpResult<StatusCode> {
    let name = TagName::new(name).into_http()?;
    let exists = state
        .services
        .tag_queries
        .does_tag_exist(name)
        .await
        .into_http()?;
    Ok(exists_status(exists))
}

#[utoipa::path(
    put,
    path = "/tag/{name}",
    params(("name" = String, Path, description = "Tag name")),
    request_body = UpdateTagRequest,
    responses(
        (status = 200, description = "Updated tag.", body = TagDto),
        (status = 404, description = "No such tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateTagRequest>,
) -> HttpResult<Json<TagDto>> {
    let name = TagName::new(name).into_http()?;
    let command = UpdateTagCommand {
        description: payload.description,
    };

    state
        .services
        .tag_commands
        .update_tag(name, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/tag/{name}",
    params(("name" = String, Path, description = "Tag name")),
    responses(
        (status = 200, description = "Tag deleted and detached from its questions.", body = StatusResponse),
        (status = 404, description = "No such tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    let name = TagName::new(name).into_http()?;
    state
        .services
        .tag_commands
        .delete_tag(name)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
