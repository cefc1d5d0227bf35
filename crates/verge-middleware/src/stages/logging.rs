//! Request logging stage.

use crate::middleware::{middleware, Middleware};
use verge_core::Outcome;

/// Emits a structured event for every incoming request.
///
/// The event is fire-and-forget: the stage passes its context through
/// untouched and can never fail.
pub fn logging() -> Middleware {
    middleware(|ctx| {
        tracing::info!(
            request_id = %ctx.request_id(),
            method = %ctx.request().method(),
            path = ctx.request().path(),
            "request received"
        );
        Outcome::Success(ctx)
    })
}
