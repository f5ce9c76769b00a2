use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use crate::error::NomsError;

/// `{error, message, retry}` body with the status the error maps to.
pub fn error_response(e: &NomsError) -> Response {
    (
        e.status_code(),
        Json(json!({
            "error": e.code(),
            "message": e.to_string(),
            "retry": e.is_retryable(),
        })),
    ).into_response()
}
