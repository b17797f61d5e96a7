use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use wardstock_core::LedgerError;

/// Map a ledger error onto a consistent JSON error response.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    match err {
        LedgerError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        LedgerError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        LedgerError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        LedgerError::AmbiguousName(name) => json_error(
            StatusCode::CONFLICT,
            "ambiguous_name",
            format!("name '{name}' matches more than one catalog entry"),
        ),
        LedgerError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        LedgerError::InsufficientStock { available } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "insufficient_stock",
                "message": format!("insufficient stock: {available} available"),
                "available": available,
            })),
        )
            .into_response(),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
