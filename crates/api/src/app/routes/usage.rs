use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use wardstock_auth::Action;
use wardstock_inventory::Department;
use wardstock_ledger::export;

use crate::app::routes::common::require;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_usage).post(record_usage))
        .route("/export.csv", get(export_usage_csv))
}

pub async fn record_usage(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::RecordUsageRequest>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::RecordUsage) {
        return resp;
    }
    let code = match body.item_code.parse::<wardstock_core::ItemCode>() {
        Ok(c) => c,
        Err(e) => return errors::ledger_error_to_response(e),
    };

    let now = services.now();
    let mut ledger = services.ledger_mut();
    let result = ledger.record_usage(
        &code,
        body.quantity,
        actor.display_name(),
        Department::from(body.department),
        body.remarks.as_deref().unwrap_or(""),
        now,
    );

    match result {
        Ok(remaining) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "item_code": code.to_string(),
                "quantity": body.quantity,
                "remaining": remaining,
            })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn list_usage(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }

    let ledger = services.ledger();
    let records: Vec<_> = ledger.usage_log().iter().map(dto::usage_to_json).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "count": records.len(), "records": records })),
    )
        .into_response()
}

pub async fn export_usage_csv(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ExportUsage) {
        return resp;
    }

    let ledger = services.ledger();
    match export::usage_csv_string(ledger.usage_log()) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"usage_report.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
