//! Immutable per-request context.
//!
//! An [`HttpContext`] is created once per request and threaded through the
//! middleware chain. Middleware never mutates the context it receives; each
//! step derives a new snapshot through the `with_*` builders, so a step
//! observes exactly the context produced by all strictly-preceding steps.

use crate::identity::AuthenticatedUser;
use crate::request::EdgeRequest;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::time::Instant;
use uuid::Uuid;

/// A unique identifier for each request, using UUID v7.
///
/// UUID v7 is time-ordered, which makes it ideal for request tracking and
/// log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new unique request ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `RequestId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of everything the pipeline knows about a request.
///
/// Destroyed at the end of the request's lifetime; never shared across
/// requests, so the pipeline needs no locking.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use http::{HeaderMap, Method};
/// use verge_core::{EdgeRequest, HttpContext};
///
/// let request = EdgeRequest::new(Method::GET, "/health", HeaderMap::new(), Bytes::new());
/// let ctx = HttpContext::new(request).with_claim("sub", "u-7");
/// assert_eq!(ctx.claim("sub"), Some("u-7"));
/// ```
#[derive(Debug, Clone)]
pub struct HttpContext {
    request: EdgeRequest,
    request_id: RequestId,
    user: Option<AuthenticatedUser>,
    claims: HashMap<String, String>,
    response_headers: HeaderMap,
    started_at: Instant,
}

impl HttpContext {
    /// Creates the initial context for a request.
    #[must_use]
    pub fn new(request: EdgeRequest) -> Self {
        Self {
            request,
            request_id: RequestId::new(),
            user: None,
            claims: HashMap::new(),
            response_headers: HeaderMap::new(),
            started_at: Instant::now(),
        }
    }

    /// The parsed request.
    #[must_use]
    pub fn request(&self) -> &EdgeRequest {
        &self.request
    }

    /// The request ID.
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// The authenticated user, if the auth stage established one.
    #[must_use]
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// All claims attached so far. Keys are unique.
    #[must_use]
    pub fn claims(&self) -> &HashMap<String, String> {
        &self.claims
    }

    /// A single claim value, if present.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).map(String::as_str)
    }

    /// Headers accumulated for the eventual response (e.g. by the CORS
    /// stage). Merged into the handler's response by the worker.
    #[must_use]
    pub fn response_headers(&self) -> &HeaderMap {
        &self.response_headers
    }

    /// When the context was created.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Elapsed time since the context was created.
    #[must_use]
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }

    /// Returns a new context with the authenticated user set.
    #[must_use]
    pub fn with_user(mut self, user: AuthenticatedUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Returns a new context with a claim inserted.
    ///
    /// Inserting an existing key replaces its value; keys stay unique.
    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    /// Returns a new context with a response header appended.
    #[must_use]
    pub fn with_response_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.response_headers.insert(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::Method;

    fn test_context() -> HttpContext {
        let request = EdgeRequest::new(Method::GET, "/", HeaderMap::new(), Bytes::new());
        HttpContext::new(request)
    }

    #[test]
    fn test_request_id_is_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_request_id_display_is_uuid() {
        let id = RequestId::new();
        let display = id.to_string();
        assert_eq!(display.len(), 36);
        assert!(Uuid::parse_str(&display).is_ok());
    }

    #[test]
    fn test_new_context_is_anonymous() {
        let ctx = test_context();
        assert!(ctx.user().is_none());
        assert!(ctx.claims().is_empty());
        assert!(ctx.response_headers().is_empty());
    }

    #[test]
    fn test_with_user_leaves_original_untouched() {
        let original = test_context();
        let enriched = original.clone().with_user(AuthenticatedUser::new("u-1"));

        assert!(original.user().is_none());
        assert_eq!(enriched.user().map(|u| u.user_id.as_str()), Some("u-1"));
    }

    #[test]
    fn test_with_claim_replaces_existing_key() {
        let ctx = test_context().with_claim("sub", "first").with_claim("sub", "second");

        assert_eq!(ctx.claim("sub"), Some("second"));
        assert_eq!(ctx.claims().len(), 1);
    }

    #[test]
    fn test_with_response_header() {
        let ctx = test_context().with_response_header(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        );

        assert_eq!(
            ctx.response_headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[test]
    fn test_derived_context_keeps_request_id() {
        let ctx = test_context();
        let id = ctx.request_id();
        let derived = ctx.with_claim("k", "v");
        assert_eq!(derived.request_id(), id);
    }
}
