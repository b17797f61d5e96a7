use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use wardstock_auth::Action;
use wardstock_core::OrderNumber;
use wardstock_purchasing::Urgency;

use crate::app::routes::common::require;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/requests", post(request_order))
        .route("/:number/approve", post(approve_order))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ViewInventory) {
        return resp;
    }

    let ledger = services.ledger();
    let orders: Vec<_> = ledger.orders().iter().map(dto::order_to_json).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "count": orders.len(), "orders": orders })),
    )
        .into_response()
}

pub async fn request_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::RequestOrderRequest>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::RequestOrder) {
        return resp;
    }
    let urgency: Urgency = match body.urgency.parse() {
        Ok(u) => u,
        Err(e) => return errors::ledger_error_to_response(e),
    };

    let today = services.today();
    let mut ledger = services.ledger_mut();
    let result = ledger.request_order(
        &body.item_name,
        body.quantity,
        urgency,
        actor.display_name(),
        today,
    );

    match result {
        Ok(number) => created_order_response(&ledger, number),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::CreateOrder) {
        return resp;
    }

    let today = services.today();
    let mut ledger = services.ledger_mut();
    let result = ledger.create_order(
        &body.item_name,
        body.quantity,
        &body.supplier,
        actor.display_name(),
        today,
    );

    match result {
        Ok(number) => created_order_response(&ledger, number),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn approve_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(number): Path<String>,
    Json(body): Json<dto::ApproveOrderRequest>,
) -> axum::response::Response {
    if let Err(resp) = require(&actor, Action::ApproveOrder) {
        return resp;
    }
    let number: OrderNumber = match number.parse() {
        Ok(n) => n,
        Err(e) => return errors::ledger_error_to_response(e),
    };

    let mut ledger = services.ledger_mut();
    match ledger.approve_order(number, body.supplier) {
        Ok(()) => match ledger.orders().iter().find(|o| o.number() == number) {
            Some(order) => (StatusCode::OK, Json(dto::order_to_json(order))).into_response(),
            None => errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("purchase order {number}"),
            ),
        },
        Err(e) => errors::ledger_error_to_response(e),
    }
}

fn created_order_response(
    ledger: &wardstock_ledger::InventoryLedger,
    number: OrderNumber,
) -> axum::response::Response {
    match ledger.orders().iter().find(|o| o.number() == number) {
        Some(order) => (StatusCode::CREATED, Json(dto::order_to_json(order))).into_response(),
        None => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "order vanished after creation",
        ),
    }
}
