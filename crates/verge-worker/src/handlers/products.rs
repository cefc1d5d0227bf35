//! Product handlers.

use crate::{respond, store};
use http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;
use verge_core::{combine, response, validate, EdgeResponse, HttpContext, Outcome};

/// `GET /api/products`
pub async fn list(_ctx: HttpContext) -> EdgeResponse {
    let products = store::list_products().await;
    response::json(StatusCode::OK, &json!({ "products": products }))
}

/// `GET /api/products/{id}`
pub async fn by_id(_ctx: HttpContext, id: Uuid) -> EdgeResponse {
    let outcome = match store::find_product(id).await {
        Some(product) => Outcome::Success(product),
        None => Outcome::not_found(format!("Product {id} not found")),
    };

    respond::to_response(outcome, |product| {
        response::json(StatusCode::OK, &json!(product))
    })
}

/// `POST /api/products`
pub async fn create(ctx: HttpContext) -> EdgeResponse {
    let body = match ctx.request().body_text().await {
        Ok(body) => body,
        Err(err) => return respond::validation_failed(&[err.to_string()]),
    };

    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let name = payload.get("name").and_then(Value::as_str).unwrap_or("");
    let price = payload.get("price").and_then(Value::as_f64).unwrap_or(0.0);

    let checks = combine(vec![
        validate::required("name", name).map(|_| ()),
        validate::positive("price", price).map(|_| ()),
    ]);

    respond::to_response(checks, |_| {
        response::json(StatusCode::CREATED, &json!({ "name": name, "price": price }))
    })
}
