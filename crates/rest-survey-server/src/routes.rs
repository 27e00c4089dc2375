// crates/rest-survey-server/src/routes.rs
// ============================================================================
// Module: HTTP Routes
// Description: Request handlers for foo and bar resources.
// Purpose: Translate HTTP requests into survey service calls.
// Dependencies: rest-survey-core, axum, serde
// ============================================================================

//! ## Overview
//! Handlers read bodies as raw bytes so that body-limit and JSON failures are
//! reported through the same `{"message": ...}` envelope as domain errors.
//! Creates answer 201; every other success answers 200.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use rest_survey_core::Bar;
use rest_survey_core::ErrorKind;
use rest_survey_core::Foo;
use rest_survey_core::JsonBody;
use rest_survey_core::SurveyError;
use rest_survey_core::parse_body;
use serde::Serialize;

use crate::server::ServerState;

// ============================================================================
// SECTION: Error Envelope
// ============================================================================

/// Error response carrying a status and the public message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Response status.
    status: StatusCode,
    /// Public message.
    message: String,
}

impl ApiError {
    /// Builds an error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the public message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SurveyError> for ApiError {
    fn from(error: SurveyError) -> Self {
        let status = match error.kind() {
            ErrorKind::Invalid => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}

/// JSON error body.
#[derive(Serialize)]
struct ErrorBody<'a> {
    /// Public message.
    message: &'a str,
}

/// Error message attached to responses for the audit layer.
#[derive(Debug, Clone)]
pub(crate) struct ErrorMessage {
    /// Public message.
    pub(crate) message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            Json(ErrorBody {
                message: &self.message,
            }),
        )
            .into_response();
        response.extensions_mut().insert(ErrorMessage {
            message: self.message,
        });
        response
    }
}

/// Handler result alias.
type ApiResult<T> = Result<T, ApiError>;

/// Decodes a raw body into a JSON object.
fn read_body(body: Result<Bytes, BytesRejection>) -> ApiResult<JsonBody> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
        } else {
            ApiError::new(StatusCode::BAD_REQUEST, "request body could not be read")
        }
    })?;
    Ok(parse_body(&bytes)?)
}

// ============================================================================
// SECTION: Service Routes
// ============================================================================

/// `GET /health`
pub(crate) async fn health() -> &'static str {
    "OK"
}

/// `DELETE /`
pub(crate) async fn reset(State(state): State<Arc<ServerState>>) -> ApiResult<&'static str> {
    if !state.allow_reset {
        return Err(ApiError::new(StatusCode::FORBIDDEN, "reset is disabled"));
    }
    state.service.reset()?;
    Ok("OK")
}

/// Unmatched paths.
pub(crate) async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "route not found")
}

/// Matched paths with an unsupported method.
pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

// ============================================================================
// SECTION: Foo Routes
// ============================================================================

/// `POST /foos`
pub(crate) async fn create_foo(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Foo>)> {
    let body = read_body(body)?;
    Ok((StatusCode::CREATED, Json(state.service.create_foo(&body)?)))
}

/// `GET /foos`
pub(crate) async fn list_foos(State(state): State<Arc<ServerState>>) -> ApiResult<Json<Vec<Foo>>> {
    Ok(Json(state.service.list_foos()?))
}

/// `GET /foos/{foo_id}`
pub(crate) async fn get_foo(
    State(state): State<Arc<ServerState>>,
    Path(foo_id): Path<String>,
) -> ApiResult<Json<Foo>> {
    Ok(Json(state.service.get_foo(&foo_id)?))
}

/// `PUT /foos/{foo_id}`
pub(crate) async fn replace_foo(
    State(state): State<Arc<ServerState>>,
    Path(foo_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Foo>> {
    let body = read_body(body)?;
    Ok(Json(state.service.replace_foo(&foo_id, &body)?))
}

/// `DELETE /foos/{foo_id}`
pub(crate) async fn delete_foo(
    State(state): State<Arc<ServerState>>,
    Path(foo_id): Path<String>,
) -> ApiResult<Json<Foo>> {
    Ok(Json(state.service.delete_foo(&foo_id)?))
}

// ============================================================================
// SECTION: Bar Routes
// ============================================================================

/// `POST /foos/{foo_id}/bar`
pub(crate) async fn create_bar(
    State(state): State<Arc<ServerState>>,
    Path(foo_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Bar>)> {
    let body = read_body(body)?;
    Ok((StatusCode::CREATED, Json(state.service.create_bar(&foo_id, &body)?)))
}

/// `GET /foos/{foo_id}/bar`
pub(crate) async fn list_bars(
    State(state): State<Arc<ServerState>>,
    Path(foo_id): Path<String>,
) -> ApiResult<Json<Vec<Bar>>> {
    Ok(Json(state.service.list_bars(&foo_id)?))
}

/// `GET /foos/{foo_id}/bar/{bar_id}`
pub(crate) async fn get_bar(
    State(state): State<Arc<ServerState>>,
    Path((foo_id, bar_id)): Path<(String, String)>,
) -> ApiResult<Json<Bar>> {
    Ok(Json(state.service.get_bar(&foo_id, &bar_id)?))
}

/// `PATCH /foos/{foo_id}/bar/{bar_id}`
pub(crate) async fn patch_bar(
    State(state): State<Arc<ServerState>>,
    Path((foo_id, bar_id)): Path<(String, String)>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Bar>> {
    let body = read_body(body)?;
    Ok(Json(state.service.patch_bar(&foo_id, &bar_id, &body)?))
}

/// `PUT /foos/{foo_id}/bar/{bar_id}`
pub(crate) async fn replace_bar(
    State(state): State<Arc<ServerState>>,
    Path((foo_id, bar_id)): Path<(String, String)>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Bar>> {
    let body = read_body(body)?;
    Ok(Json(state.service.replace_bar(&foo_id, &bar_id, &body)?))
}

/// `DELETE /foos/{foo_id}/bar/{bar_id}`
pub(crate) async fn delete_bar(
    State(state): State<Arc<ServerState>>,
    Path((foo_id, bar_id)): Path<(String, String)>,
) -> ApiResult<Json<Bar>> {
    Ok(Json(state.service.delete_bar(&foo_id, &bar_id)?))
}
