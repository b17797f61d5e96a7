use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use wardstock_auth::Action;
use wardstock_core::ItemCode;
use wardstock_inventory::{ItemCategory, NewItem};
use wardstock_ledger::ItemFilter;

use crate::app::routes::common::require;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

/// Default expiring-soon window, in days.
const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(add_item))
        .route("/items/:code", get(get_item))
        .route("/items/:code/stock", post(update_stock))
        .route("/resolve", get(resolve_name))
        .route("/alerts/low-stock", get(low_stock_alerts))
        .route("/alerts/expiring", get(expiring_soon))
}

fn parse_code(raw: &str) -> Result<ItemCode, axum::response::Response> {
    raw.parse()
        .map_err(|e: wardstock_core::LedgerError| errors::ledger_error_to_response(e))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }

    let filter = ItemFilter {
        name_contains: query.name_contains,
        category: query.category.map(ItemCategory::from),
    };

    let ledger = services.ledger();
    let items: Vec<_> = ledger
        .list_items(&filter)
        .into_iter()
        .map(dto::item_to_json)
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(code): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }
    let code = match parse_code(&code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let ledger = services.ledger();
    match ledger.item(&code) {
        Some(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("item {code}")),
    }
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::AddItem) {
        return resp;
    }
    let code = match parse_code(&body.code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let new = NewItem {
        code,
        name: body.name,
        category: ItemCategory::from(body.category),
        quantity: body.quantity,
        min_stock: body.min_stock,
        unit: body.unit,
        expiry: body.expiry,
        location: body.location,
    };

    let now = services.now();
    let mut ledger = services.ledger_mut();
    match ledger.add_item(new, now) {
        Ok(item) => (StatusCode::CREATED, Json(dto::item_to_json(item))).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn update_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(code): Path<String>,
    Json(body): Json<dto::UpdateStockRequest>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::UpdateStock) {
        return resp;
    }
    let code = match parse_code(&code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let now = services.now();
    let mut ledger = services.ledger_mut();
    match ledger.update_stock(&code, body.quantity, body.min_stock, &body.location, now) {
        Ok(()) => match ledger.item(&code) {
            Some(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
            None => errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("item {code}")),
        },
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn resolve_name(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Query(query): Query<dto::ResolveQuery>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }

    let ledger = services.ledger();
    match ledger.resolve_item_code(&query.name) {
        Ok(code) => (
            StatusCode::OK,
            Json(serde_json::json!({ "name": query.name, "code": code.to_string() })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn low_stock_alerts(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }

    let ledger = services.ledger();
    let items: Vec<_> = ledger
        .low_stock_alerts()
        .into_iter()
        .map(dto::item_to_json)
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "count": items.len(), "items": items })),
    )
        .into_response()
}

pub async fn expiring_soon(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Query(query): Query<dto::ExpiringQuery>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }

    let window_days = query.window_days.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
    if window_days < 0 {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "window_days cannot be negative",
        );
    }

    let today = services.today();
    let ledger = services.ledger();
    let items: Vec<_> = ledger
        .expiring_soon(today, window_days)
        .into_iter()
        .map(dto::item_to_json)
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "window_days": window_days,
            "count": items.len(),
            "items": items,
        })),
    )
        .into_response()
}
