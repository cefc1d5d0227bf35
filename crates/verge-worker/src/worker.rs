//! The end-to-end request pipeline.

use crate::dispatch::dispatch;
use crate::respond;
use verge_core::{EdgeRequest, EdgeResponse, HttpContext, Outcome};
use verge_middleware::stages::{auth, cors, logging, timing, AuthConfig, CorsConfig};
use verge_middleware::{compose, Middleware};
use verge_router::parse;

/// Configuration for a [`Worker`].
#[derive(Debug, Clone, Default)]
pub struct WorkerConfig {
    /// CORS stage configuration.
    pub cors: CorsConfig,
    /// Auth stage configuration.
    pub auth: AuthConfig,
}

/// A request pipeline instance.
///
/// The worker is built once and shared; each call to [`Worker::handle`] is
/// an independent request-scoped execution with no state carried between
/// requests.
///
/// Control flow per request: route resolution, initial context, the
/// middleware chain (logging, timing, CORS, auth), then handler dispatch.
/// Any failure anywhere maps directly to its HTTP error response without
/// reaching the handler.
pub struct Worker {
    chain: Middleware,
}

impl Worker {
    /// Creates a worker with the default middleware configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WorkerConfig::default())
    }

    /// Creates a worker with explicit middleware configuration.
    #[must_use]
    pub fn with_config(config: WorkerConfig) -> Self {
        let chain = compose(vec![
            logging(),
            timing(),
            cors(config.cors),
            auth(config.auth),
        ]);
        Self { chain }
    }

    /// Handles one request to completion.
    ///
    /// Always produces exactly one response; unclassifiable requests get a
    /// 404, middleware failures get their mapped status, and everything
    /// else is the handler's decision.
    pub async fn handle(&self, request: EdgeRequest) -> EdgeResponse {
        let route = parse(request.method(), request.path());
        let ctx = HttpContext::new(request);
        let request_id = ctx.request_id();
        let started_at = ctx.started_at();

        let response = match (self.chain)(ctx) {
            Outcome::Success(ctx) => {
                // Headers accumulated by the chain (CORS) belong on the
                // response no matter which handler produced it.
                let chain_headers = ctx.response_headers().clone();
                let mut response = dispatch(&route)(ctx).await;
                for (name, value) in &chain_headers {
                    response.headers_mut().insert(name, value.clone());
                }
                response
            }
            Outcome::ValidationError(messages) => respond::validation_failed(&messages),
            Outcome::NotFound(message) => respond::not_found(&message),
            Outcome::Unauthorized(message) => respond::unauthorized(&message),
        };

        tracing::info!(
            request_id = %request_id,
            operation = route.operation_id(),
            status = response.status().as_u16(),
            elapsed = ?started_at.elapsed(),
            "request completed"
        );

        response
    }
}

impl Default for Worker {
    fn default() -> Self {
        Self::new()
    }
}
