//! The middleware function type and composer.

use std::sync::Arc;
use verge_core::{HttpContext, Outcome};

/// The underlying middleware function signature.
///
/// A middleware receives the context produced by all strictly-preceding
/// steps and returns a *new* context (never a mutation of the one it
/// received) wrapped in an [`Outcome`]. Any failure variant short-circuits
/// the rest of the chain.
pub type MiddlewareFn = dyn Fn(HttpContext) -> Outcome<HttpContext> + Send + Sync;

/// A shareable middleware step.
pub type Middleware = Arc<MiddlewareFn>;

/// Wraps a closure as a [`Middleware`].
pub fn middleware<F>(f: F) -> Middleware
where
    F: Fn(HttpContext) -> Outcome<HttpContext> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Sequences an ordered list of middleware into one.
///
/// The composed middleware runs each step in order via `bind`, threading
/// the context returned by step *i* into step *i+1*. The first non-success
/// outcome is returned immediately and the remaining steps never run. The
/// composed middleware holds no state between invocations; every call is
/// independent.
///
/// Composing an empty list yields the identity middleware.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use http::{HeaderMap, Method};
/// use verge_core::{EdgeRequest, HttpContext, Outcome};
/// use verge_middleware::{compose, middleware};
///
/// let chain = compose(vec![
///     middleware(|ctx| Outcome::Success(ctx.with_claim("a", "1"))),
///     middleware(|ctx| Outcome::Success(ctx.with_claim("b", "2"))),
/// ]);
///
/// let request = EdgeRequest::new(Method::GET, "/", HeaderMap::new(), Bytes::new());
/// match chain(HttpContext::new(request)) {
///     Outcome::Success(ctx) => {
///         assert_eq!(ctx.claim("a"), Some("1"));
///         assert_eq!(ctx.claim("b"), Some("2"));
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub fn compose<I>(steps: I) -> Middleware
where
    I: IntoIterator<Item = Middleware>,
{
    let steps: Vec<Middleware> = steps.into_iter().collect();
    Arc::new(move |ctx| {
        steps
            .iter()
            .fold(Outcome::Success(ctx), |outcome, step| outcome.bind(|ctx| step(ctx)))
    })
}
