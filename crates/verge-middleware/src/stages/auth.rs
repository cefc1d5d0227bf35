//! Auth stage.
//!
//! Reads the `Authorization` bearer header and populates the caller
//! identity and claims. Only the credential's *shape* is checked here;
//! cryptographic token validation is owned by the hosting platform, which
//! has attested the header before the worker ever runs.

use crate::middleware::{middleware, Middleware};
use verge_core::{AuthenticatedUser, Outcome};

/// Configuration for the auth stage.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// When `true`, requests without credentials are rejected with
    /// `Unauthorized`. When `false`, such requests pass through anonymous.
    pub required: bool,
}

/// Builds the auth stage from its configuration.
///
/// A present but malformed `Authorization` header (wrong scheme, empty
/// token) is always rejected, even when auth is optional: a caller who
/// tried to authenticate must not silently proceed anonymous.
pub fn auth(config: AuthConfig) -> Middleware {
    middleware(move |ctx| {
        let header = ctx.request().header("authorization").map(str::to_string);

        match header {
            None if config.required => Outcome::unauthorized("Missing authorization header"),
            None => Outcome::Success(ctx),
            Some(value) => match value.strip_prefix("Bearer ").filter(|t| !t.trim().is_empty()) {
                Some(token) => {
                    let subject = token.trim().to_string();
                    let user = AuthenticatedUser::new(subject.clone());
                    Outcome::Success(
                        ctx.with_user(user)
                            .with_claim("sub", subject)
                            .with_claim("auth_scheme", "bearer"),
                    )
                }
                None => Outcome::unauthorized("Invalid authorization header"),
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue, Method};
    use verge_core::{EdgeRequest, HttpContext};

    fn context_with_auth(header: Option<&str>) -> HttpContext {
        let mut headers = HeaderMap::new();
        if let Some(value) = header {
            headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        }
        let request = EdgeRequest::new(Method::GET, "/api/users", headers, Bytes::new());
        HttpContext::new(request)
    }

    #[test]
    fn test_optional_auth_lets_anonymous_through() {
        let outcome = auth(AuthConfig::default())(context_with_auth(None));
        match outcome {
            Outcome::Success(ctx) => assert!(ctx.user().is_none()),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_required_auth_rejects_missing_header() {
        let outcome = auth(AuthConfig { required: true })(context_with_auth(None));
        assert_eq!(
            outcome.map(|_| ()),
            Outcome::Unauthorized("Missing authorization header".to_string())
        );
    }

    #[test]
    fn test_bearer_token_populates_user_and_claims() {
        let outcome = auth(AuthConfig { required: true })(context_with_auth(Some("Bearer u-42")));
        match outcome {
            Outcome::Success(ctx) => {
                assert_eq!(ctx.user().map(|u| u.user_id.as_str()), Some("u-42"));
                assert_eq!(ctx.claim("sub"), Some("u-42"));
                assert_eq!(ctx.claim("auth_scheme"), Some("bearer"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_header_is_rejected_even_when_optional() {
        for bad in ["Basic dXNlcg==", "Bearer", "Bearer   ", "token-without-scheme"] {
            let outcome = auth(AuthConfig::default())(context_with_auth(Some(bad)));
            assert_eq!(
                outcome.map(|_| ()),
                Outcome::Unauthorized("Invalid authorization header".to_string()),
                "header {bad:?} must be rejected"
            );
        }
    }
}
