//! Route handlers.
//!
//! One handler per terminal route variant (see [`dispatch`]). Each handler
//! converts its own outcome into a concrete response before returning:
//! a handler's return value is the end of the railway for that request.
//!
//! [`dispatch`]: crate::dispatch::dispatch

pub mod products;
pub mod system;
pub mod users;

use crate::respond;
use http::StatusCode;
use verge_core::{response, EdgeResponse, HttpContext};

/// Placeholder for route variants without a real implementation yet.
///
/// Returns 200 with a "not implemented" body; reaching a mapped but
/// unfinished route is not an error condition.
pub async fn not_implemented(_ctx: HttpContext) -> EdgeResponse {
    response::text(StatusCode::OK, "not implemented")
}

/// Terminal handler for unmatched routes.
pub async fn route_not_found(_ctx: HttpContext) -> EdgeResponse {
    respond::not_found("Route not found")
}
