//! JSON response helpers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `payload` as the response body with the given status.
pub fn respond_json<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// `{"error": message}` with the given status.
pub fn respond_error(status: StatusCode, message: impl Into<String>) -> Response {
    respond_json(
        status,
        ErrorBody {
            error: message.into(),
        },
    )
}
