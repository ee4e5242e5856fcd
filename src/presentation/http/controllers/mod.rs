// src/presentation/http/controllers/mod.rs
pub mod answers;
pub mod questions;
pub mod tags;
pub mod users;

use crate::application::error::ApplicationError;
use crate::domain::{answer::AnswerId, question::QuestionId};
use crate::presentation::http::error::HttpResult;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `201 Created` with a `Location` header and the stored resource as body.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// `200` when the resource exists, `404` otherwise; HEAD carries no body.
pub(crate) fn exists_status(exists: bool) -> StatusCode {
    if exists {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

// Stored ids are always positive, so any other path id names nothing.
pub(crate) fn question_id(id: i64) -> HttpResult<QuestionId> {
    QuestionId::new(id)
        .map_err(|_| ApplicationError::not_found(format!("question not found: {id}")).into())
}

pub(crate) fn answer_id(id: i64) -> HttpResult<AnswerId> {
    AnswerId::new(id)
        .map_err(|_| ApplicationError::not_found(format!("answer not found: {id}")).into())
}
