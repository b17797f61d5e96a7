use chrono::NaiveDate;
use serde::Deserialize;

use wardstock_inventory::{Item, UsageRecord};
use wardstock_ledger::LedgerOverview;
use wardstock_purchasing::PurchaseOrder;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub code: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub unit: String,
    pub expiry: Option<NaiveDate>,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub quantity: u32,
    pub min_stock: u32,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordUsageRequest {
    pub item_code: String,
    pub quantity: u32,
    pub department: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestOrderRequest {
    pub item_name: String,
    pub quantity: u32,
    pub urgency: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub item_name: String,
    pub quantity: u32,
    pub supplier: String,
}

#[derive(Debug, Deserialize)]
pub struct ApproveOrderRequest {
    pub supplier: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub name_contains: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    pub window_days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TopItemsQuery {
    pub limit: Option<usize>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "code": item.code().to_string(),
        "name": item.name(),
        "category": item.category().as_str(),
        "quantity": item.quantity(),
        "min_stock": item.min_stock(),
        "unit": item.unit(),
        "expiry": item.expiry().map(|d| d.to_string()),
        "location": item.location(),
        "last_updated": item.last_updated().to_rfc3339(),
        "low_stock": item.is_low_stock(),
    })
}

pub fn usage_to_json(record: &UsageRecord) -> serde_json::Value {
    serde_json::json!({
        "recorded_at": record.recorded_at.to_rfc3339(),
        "item_code": record.item_code.to_string(),
        "item_name": record.item_name,
        "quantity": record.quantity,
        "used_by": record.used_by,
        "department": record.department.as_str(),
        "remarks": record.remarks,
    })
}

pub fn order_to_json(order: &PurchaseOrder) -> serde_json::Value {
    serde_json::json!({
        "number": order.number().to_string(),
        "date": order.date().to_string(),
        "item_name": order.item_name(),
        "quantity": order.quantity(),
        "supplier": order.supplier_display(),
        "status": order.status().to_string(),
        "requested_by": order.requested_by(),
    })
}

pub fn overview_to_json(overview: &LedgerOverview) -> serde_json::Value {
    serde_json::json!({
        "total_items": overview.total_items,
        "low_stock_items": overview.low_stock_items,
        "usage_entries": overview.usage_entries,
        "pending_orders": overview.pending_orders,
    })
}
