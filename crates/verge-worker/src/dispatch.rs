//! Handler dispatch.
//!
//! A total mapping from every route variant to its handler. Route payloads
//! (ids, search terms) travel into the handler by capture, so the handler
//! signature stays uniform for the worker.

use crate::handlers;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use verge_core::{EdgeResponse, HttpContext};
use verge_router::{ApiRoute, ProductsRoute, UsersRoute};

/// The boxed future a handler returns.
pub type HandlerFuture = Pin<Box<dyn Future<Output = EdgeResponse> + Send>>;

/// A type-erased route handler.
///
/// Receives the final context produced by the middleware chain and fully
/// resolves its response before returning; no response ever references an
/// unresolved value.
pub type Handler = Arc<dyn Fn(HttpContext) -> HandlerFuture + Send + Sync>;

fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(HttpContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = EdgeResponse> + Send + 'static,
{
    Arc::new(move |ctx| Box::pin(f(ctx)))
}

/// Returns the handler for a route.
///
/// Total over every variant: route variants without a real implementation
/// map to the fixed placeholder handler (200 "not implemented") rather
/// than failing, and [`ApiRoute::NotFound`] maps to the 404 handler. The
/// match is deliberately exhaustive: a new route variant will not compile
/// until it is mapped here.
#[must_use]
pub fn dispatch(route: &ApiRoute) -> Handler {
    match route {
        ApiRoute::Home => handler(handlers::system::home),
        ApiRoute::Health => handler(handlers::system::health),

        ApiRoute::Users(UsersRoute::List) => handler(handlers::users::list),
        ApiRoute::Users(UsersRoute::Create) => handler(handlers::users::create),
        ApiRoute::Users(UsersRoute::Search(email)) => {
            let email = email.clone();
            handler(move |ctx| handlers::users::search(ctx, email.clone()))
        }
        ApiRoute::Users(UsersRoute::ById(_)) => handler(handlers::not_implemented),
        ApiRoute::Users(UsersRoute::Update(_)) => handler(handlers::not_implemented),

        ApiRoute::Products(ProductsRoute::List) => handler(handlers::products::list),
        ApiRoute::Products(ProductsRoute::Create) => handler(handlers::products::create),
        ApiRoute::Products(ProductsRoute::ById(id)) => {
            let id = *id;
            handler(move |ctx| handlers::products::by_id(ctx, id))
        }
        ApiRoute::Products(ProductsRoute::Update(_)) => handler(handlers::not_implemented),
        ApiRoute::Products(ProductsRoute::Search(_)) => handler(handlers::not_implemented),

        ApiRoute::NotFound => handler(handlers::route_not_found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, Method, StatusCode};
    use http_body_util::BodyExt;
    use verge_core::EdgeRequest;

    fn context() -> HttpContext {
        HttpContext::new(EdgeRequest::new(Method::GET, "/", HeaderMap::new(), Bytes::new()))
    }

    async fn body_string(response: EdgeResponse) -> String {
        let collected = response.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_unimplemented_variants_use_the_placeholder() {
        for route in [
            ApiRoute::Users(UsersRoute::ById(7)),
            ApiRoute::Users(UsersRoute::Update(7)),
            ApiRoute::Products(ProductsRoute::Update(uuid::Uuid::nil())),
            ApiRoute::Products(ProductsRoute::Search("mug".to_string())),
        ] {
            let response = dispatch(&route)(context()).await;
            assert_eq!(response.status(), StatusCode::OK, "route {route:?}");
            assert_eq!(body_string(response).await, "not implemented");
        }
    }

    #[tokio::test]
    async fn test_not_found_route_maps_to_404_handler() {
        let response = dispatch(&ApiRoute::NotFound)(context()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"error":"Route not found"}"#);
    }

    #[tokio::test]
    async fn test_route_payload_reaches_the_handler() {
        let route = ApiRoute::Users(UsersRoute::Search("alice@example.com".to_string()));
        let response = dispatch(&route)(context()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
