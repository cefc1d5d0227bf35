//! User handlers.

use crate::{respond, store};
use http::StatusCode;
use serde_json::{json, Value};
use verge_core::{combine, response, validate, EdgeResponse, HttpContext, Outcome};

/// `GET /api/users`
pub async fn list(_ctx: HttpContext) -> EdgeResponse {
    let users = store::list_users().await;
    response::json(StatusCode::OK, &json!({ "users": users }))
}

/// `POST /api/users`
///
/// Presence/shape validation only, via `combine` so the client sees every
/// field problem in one round trip.
pub async fn create(ctx: HttpContext) -> EdgeResponse {
    let body = match ctx.request().body_text().await {
        Ok(body) => body,
        Err(err) => return respond::validation_failed(&[err.to_string()]),
    };

    // Unparseable bodies degrade to "all fields missing" rather than a
    // distinct error; the field messages tell the client what to send.
    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let name = payload.get("name").and_then(Value::as_str).unwrap_or("");
    let email = payload.get("email").and_then(Value::as_str).unwrap_or("");

    let checks = combine(vec![
        validate::required("name", name).map(|_| ()),
        validate::email_shape(email).map(|_| ()),
    ]);

    respond::to_response(checks, |_| {
        response::json(StatusCode::CREATED, &json!({ "name": name, "email": email }))
    })
}

/// `GET /api/users/search/{email}`
pub async fn search(_ctx: HttpContext, email: String) -> EdgeResponse {
    let outcome = match store::find_user_by_email(&email).await {
        Some(user) => Outcome::Success(user),
        None => Outcome::not_found(format!("No user with email {email}")),
    };

    respond::to_response(outcome, |user| response::json(StatusCode::OK, &json!(user)))
}
