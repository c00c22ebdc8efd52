//! REST API handlers.

pub mod twitch_data;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// Fallback message when an error carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Handler error: a status code and a `{"error": ...}` body.
pub type ApiError = (StatusCode, Json<Value>);

/// Standard error response.
pub fn err_json(status: StatusCode, message: &str) -> ApiError {
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        message
    };
    (status, Json(json!({ "error": message })))
}
