//! CORS stage.
//!
//! Appends `Access-Control-Allow-*` headers to the context's response
//! headers; the worker merges them into whatever response the request
//! eventually produces. The stage never rejects a request; origin
//! enforcement is left to the hosting platform's edge configuration.

use crate::middleware::{middleware, Middleware};
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use http::{HeaderValue, Method};
use verge_core::Outcome;

/// Configuration for the CORS stage.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Value for `Access-Control-Allow-Origin`. `*` allows any origin.
    pub allowed_origin: String,
    /// Methods advertised in `Access-Control-Allow-Methods`.
    pub allowed_methods: Vec<Method>,
    /// Header names advertised in `Access-Control-Allow-Headers`.
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
            allowed_methods: vec![Method::GET, Method::POST, Method::PUT],
            allowed_headers: vec!["content-type".to_string(), "authorization".to_string()],
        }
    }
}

/// Builds the CORS stage from its configuration.
///
/// Configured values that do not form valid header values are skipped
/// rather than failing the request.
pub fn cors(config: CorsConfig) -> Middleware {
    let methods = config
        .allowed_methods
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let headers = config.allowed_headers.join(", ");

    middleware(move |mut ctx| {
        if let Ok(origin) = HeaderValue::from_str(&config.allowed_origin) {
            ctx = ctx.with_response_header(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        if let Ok(methods) = HeaderValue::from_str(&methods) {
            ctx = ctx.with_response_header(ACCESS_CONTROL_ALLOW_METHODS, methods);
        }
        if let Ok(headers) = HeaderValue::from_str(&headers) {
            ctx = ctx.with_response_header(ACCESS_CONTROL_ALLOW_HEADERS, headers);
        }
        Outcome::Success(ctx)
    })
}
