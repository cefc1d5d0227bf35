//! Raw-request adapter.
//!
//! [`EdgeRequest`] wraps whatever the hosting runtime hands the worker
//! (an `http::Request` with a buffered body) behind the small surface the
//! pipeline actually consumes: method, path, headers, and an asynchronous
//! body read.

use bytes::Bytes;
use http::{HeaderMap, Method};
use http_body_util::{BodyExt, Full};
use thiserror::Error;

/// Errors produced while reading a request body.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body bytes were not valid UTF-8.
    #[error("request body is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// An incoming request as seen by the pipeline.
///
/// The context snapshots one of these per request; cloning is cheap because
/// the body is reference-counted [`Bytes`].
#[derive(Debug, Clone)]
pub struct EdgeRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Full<Bytes>,
}

impl EdgeRequest {
    /// Creates a request from its parts.
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            path: path.into(),
            headers,
            body: Full::new(body),
        }
    }

    /// Adapts a request from the hosting runtime.
    pub fn from_http(request: http::Request<Full<Bytes>>) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method,
            path: parts.uri.path().to_string(),
            headers: parts.headers,
            body,
        }
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, as received (normalization is the matcher's job).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value as a string, if present and representable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Reads the request body as text.
    ///
    /// The read is asynchronous because the hosting runtime may still be
    /// streaming the body; it fully resolves before returning.
    pub async fn body_text(&self) -> Result<String, BodyError> {
        let collected = match self.body.clone().collect().await {
            Ok(collected) => collected,
            Err(never) => match never {},
        };
        Ok(String::from_utf8(collected.to_bytes().to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_extracts_parts() {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("https://worker.example.com/api/users?page=2")
            .header("content-type", "application/json")
            .body(Full::new(Bytes::from_static(b"{}")))
            .unwrap();

        let edge = EdgeRequest::from_http(request);
        assert_eq!(edge.method(), &Method::POST);
        assert_eq!(edge.path(), "/api/users");
        assert_eq!(edge.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_body_text_reads_full_body() {
        let edge = EdgeRequest::new(
            Method::POST,
            "/api/users",
            HeaderMap::new(),
            Bytes::from_static(b"{\"name\":\"Alice\"}"),
        );

        let body = edge.body_text().await.unwrap();
        assert_eq!(body, "{\"name\":\"Alice\"}");
    }

    #[tokio::test]
    async fn test_body_text_rejects_invalid_utf8() {
        let edge = EdgeRequest::new(
            Method::POST,
            "/api/users",
            HeaderMap::new(),
            Bytes::from_static(&[0xff, 0xfe]),
        );

        assert!(edge.body_text().await.is_err());
    }

    #[tokio::test]
    async fn test_body_text_is_repeatable() {
        let edge = EdgeRequest::new(
            Method::POST,
            "/",
            HeaderMap::new(),
            Bytes::from_static(b"hello"),
        );

        assert_eq!(edge.body_text().await.unwrap(), "hello");
        assert_eq!(edge.body_text().await.unwrap(), "hello");
    }
}
