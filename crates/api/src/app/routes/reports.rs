use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use wardstock_auth::Action;

use crate::app::routes::common::require;
use crate::app::services::AppServices;
use crate::app::{dto, errors::json_error};
use crate::context::ActorContext;

/// Default cut-off for the most-used-items report.
const DEFAULT_TOP_ITEMS: usize = 5;

pub fn router() -> Router {
    Router::new()
        .route("/overview", get(overview))
        .route("/usage-by-department", get(usage_by_department))
        .route("/top-items", get(top_items))
}

pub async fn overview(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewReports) {
        return resp;
    }

    let ledger = services.ledger();
    (
        StatusCode::OK,
        Json(dto::overview_to_json(&ledger.overview())),
    )
        .into_response()
}

pub async fn usage_by_department(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewReports) {
        return resp;
    }

    let ledger = services.ledger();
    let totals: Vec<_> = ledger
        .usage_by_department()
        .into_iter()
        .map(|t| {
            serde_json::json!({
                "department": t.department.as_str(),
                "total_quantity": t.total_quantity,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "departments": totals })),
    )
        .into_response()
}

pub async fn top_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Query(query): Query<dto::TopItemsQuery>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewReports) {
        return resp;
    }

    let limit = query.limit.unwrap_or(DEFAULT_TOP_ITEMS);
    if limit == 0 {
        return json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "limit must be at least 1",
        );
    }

    let ledger = services.ledger();
    let totals: Vec<_> = ledger
        .top_used_items(limit)
        .into_iter()
        .map(|t| {
            serde_json::json!({
                "item_name": t.item_name,
                "total_quantity": t.total_quantity,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "limit": limit, "items": totals })),
    )
        .into_response()
}
