//! Request timing stage.

use crate::middleware::{middleware, Middleware};
use verge_core::Outcome;

/// Claim under which the request start time is recorded.
pub const START_CLAIM: &str = "request_started_at";

/// Stamps the wall-clock start of the request into the claims map.
///
/// The context already carries a monotonic start instant for latency
/// measurement; this claim is the wall-clock counterpart that handlers can
/// echo into response bodies.
pub fn timing() -> Middleware {
    middleware(|ctx| {
        let started_at = chrono::Utc::now().to_rfc3339();
        Outcome::Success(ctx.with_claim(START_CLAIM, started_at))
    })
}
