//! Home and health handlers.

use http::StatusCode;
use serde_json::json;
use verge_core::{response, EdgeResponse, HttpContext};

/// `GET /`
pub async fn home(_ctx: HttpContext) -> EdgeResponse {
    response::text(StatusCode::OK, "Hello from the Worker!")
}

/// `GET /health`
pub async fn health(_ctx: HttpContext) -> EdgeResponse {
    response::json(
        StatusCode::OK,
        &json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{header, HeaderMap, Method};
    use http_body_util::BodyExt;
    use verge_core::EdgeRequest;

    fn context(path: &str) -> HttpContext {
        HttpContext::new(EdgeRequest::new(Method::GET, path, HeaderMap::new(), Bytes::new()))
    }

    async fn body_string(response: EdgeResponse) -> String {
        let collected = response.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_greeting() {
        let response = home(context("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Hello from the Worker!");
    }

    #[tokio::test]
    async fn test_health_reports_healthy_with_timestamp() {
        let response = health(context("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = body_string(response).await;
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["status"], "healthy");
        let timestamp = parsed["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
