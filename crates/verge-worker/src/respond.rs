//! Outcome-to-response mapping.
//!
//! The terminal point of every railway chain. Each failure kind maps to a
//! fixed HTTP status; the success status is whatever the handler chose.
//! Nothing here is retried and nothing throws; a failure produced deep in
//! a validation chain surfaces unchanged all the way to these functions.

use http::StatusCode;
use serde_json::json;
use verge_core::{response, EdgeResponse, Outcome};

/// Maps an outcome to a response.
///
/// `on_success` renders the success value; every failure variant maps to
/// its fixed status response.
pub fn to_response<T>(
    outcome: Outcome<T>,
    on_success: impl FnOnce(T) -> EdgeResponse,
) -> EdgeResponse {
    match outcome {
        Outcome::Success(value) => on_success(value),
        Outcome::ValidationError(messages) => validation_failed(&messages),
        Outcome::NotFound(message) => not_found(&message),
        Outcome::Unauthorized(message) => unauthorized(&message),
    }
}

/// 400 with every validation message, in order.
pub fn validation_failed(messages: &[String]) -> EdgeResponse {
    response::json(StatusCode::BAD_REQUEST, &json!({ "errors": messages }))
}

/// 404 with the failure message.
pub fn not_found(message: &str) -> EdgeResponse {
    response::json(StatusCode::NOT_FOUND, &json!({ "error": message }))
}

/// 401 with the failure message.
pub fn unauthorized(message: &str) -> EdgeResponse {
    response::json(StatusCode::UNAUTHORIZED, &json!({ "error": message }))
}

/// 500 fallback for faults outside the modeled outcomes.
///
/// The pipeline itself never produces this; every step returns one of the
/// four outcome variants. It exists for the host runtime's top-level
/// handler, which must respond exactly once even when a handler future
/// fails unexpectedly.
pub fn internal_error() -> EdgeResponse {
    response::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &json!({ "error": "internal error" }),
    )
}
