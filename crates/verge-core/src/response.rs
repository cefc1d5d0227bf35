//! Response construction helpers.
//!
//! Responses cross back to the hosting runtime as `http::Response` values
//! with buffered bodies. The helpers here are the only places that build
//! them; a `content-type: application/json` header is attached whenever the
//! body is JSON-shaped.

use bytes::Bytes;
use http::{header, StatusCode};
use http_body_util::Full;

/// The HTTP response type produced by handlers and the worker.
pub type EdgeResponse = http::Response<Full<Bytes>>;

/// Builds a plain-text response.
pub fn text(status: StatusCode, body: impl Into<String>) -> EdgeResponse {
    http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.into())))
        .expect("failed to build text response")
}

/// Builds a JSON response with the `application/json` content type.
pub fn json(status: StatusCode, body: &serde_json::Value) -> EdgeResponse {
    http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .expect("failed to build JSON response")
}
