use axum::http::StatusCode;

use wardstock_auth::Action;

use crate::app::errors;
use crate::context::ActorContext;

/// Check role policy for the acting user; an `Err` is the ready-to-return
/// 403 response.
pub fn require(actor: &ActorContext, action: Action) -> Result<(), axum::response::Response> {
    wardstock_auth::authorize(actor.role(), action).map_err(|e| {
        tracing::warn!(actor = %actor.display_name(), role = %actor.role(), ?action, "denied");
        errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string())
    })
}
