use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use wardstock_auth::{Actor, Role};

use crate::context::ActorContext;

/// Identity middleware.
///
/// The identity collaborator in front of this service supplies the acting
/// user per request via headers; credential validation happens there, not
/// here. Requests without a usable identity are rejected with 401.
///
/// - `x-actor`: display name, lands in audit fields (required)
/// - `x-actor-role`: Nurse | Doctor | Admin (required)
/// - `x-actor-username`: login identity (optional, defaults to `x-actor`)
pub async fn identity_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let display_name = required_header(req.headers(), "x-actor")?;
    let role: Role = required_header(req.headers(), "x-actor-role")?
        .parse()
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    let username = optional_header(req.headers(), "x-actor-username")
        .unwrap_or_else(|| display_name.clone());

    req.extensions_mut()
        .insert(ActorContext::new(Actor::new(username, display_name, role)));

    Ok(next.run(req).await)
}

fn required_header(headers: &HeaderMap, name: &str) -> Result<String, StatusCode> {
    optional_header(headers, name).ok_or(StatusCode::UNAUTHORIZED)
}

fn optional_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
