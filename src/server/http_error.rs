/// Centralized helpers for HTTP error responses.
///
/// Use these helpers to ensure all error bodies are consistent and carry a code and context.
use actix_web::{HttpResponse, http::StatusCode};
use log::error;

use crate::game::session::GameError;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string (e.g. player name).
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}

/// Response for failures the player cannot fix (store I/O, worker pool).
pub fn internal_error(err: &dyn std::fmt::Display, context: Option<&str>) -> HttpResponse {
    error!("[Server] Request failed: {}", err);
    http_error_response(
        "StoreUnavailable",
        "Saved games could not be read or written.",
        context,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

/// Store failures are server errors; everything else is the caller's.
pub fn is_internal(err: &GameError) -> bool {
    matches!(err, GameError::Store(_))
}
