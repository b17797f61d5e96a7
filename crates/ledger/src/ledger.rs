use chrono::{DateTime, NaiveDate, Utc};

use wardstock_core::id::ORDER_NUMBER_BASE;
use wardstock_core::{ItemCode, LedgerError, LedgerResult, OrderNumber};
use wardstock_inventory::{Department, Item, ItemCategory, NewItem, UsageRecord};
use wardstock_purchasing::{PurchaseOrder, Urgency};

/// Filter for catalog listings. Both fields are optional; name matching is a
/// case-insensitive substring, category matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub name_contains: Option<String>,
    pub category: Option<ItemCategory>,
}

impl ItemFilter {
    fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = &self.name_contains {
            if !item
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category() != category {
                return false;
            }
        }
        true
    }
}

/// The session's inventory ledger.
///
/// Owns the catalog, the append-only usage log, and the purchase orders.
/// Collections preserve insertion order; lookups are linear scans over
/// tables that stay small for the life of a session.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    items: Vec<Item>,
    usage_log: Vec<UsageRecord>,
    orders: Vec<PurchaseOrder>,
    next_order_number: Option<OrderNumber>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- catalog -----------------------------------------------------------

    /// List catalog entries matching `filter`, in insertion order.
    pub fn list_items(&self, filter: &ItemFilter) -> Vec<&Item> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    /// Direct lookup by stable identifier.
    pub fn item(&self, code: &ItemCode) -> Option<&Item> {
        self.items.iter().find(|i| i.code() == code)
    }

    /// Resolve a display name to the stable identifier.
    ///
    /// Names are not unique, so this is explicitly fallible: zero matches is
    /// `NotFound`, more than one is `AmbiguousName`. Matching is
    /// case-insensitive and exact.
    pub fn resolve_item_code(&self, name: &str) -> LedgerResult<ItemCode> {
        let wanted = name.trim().to_lowercase();
        let mut matches = self
            .items
            .iter()
            .filter(|i| i.name().to_lowercase() == wanted);

        match (matches.next(), matches.next()) {
            (None, _) => Err(LedgerError::not_found(format!("item named '{name}'"))),
            (Some(item), None) => Ok(item.code().clone()),
            (Some(_), Some(_)) => Err(LedgerError::ambiguous_name(name.trim())),
        }
    }

    /// Add a new catalog entry.
    ///
    /// A code already present in the catalog is rejected with `Conflict`;
    /// silently overwriting would detach the audit trail from the item it
    /// describes.
    pub fn add_item(&mut self, new: NewItem, at: DateTime<Utc>) -> LedgerResult<&Item> {
        if self.item(&new.code).is_some() {
            return Err(LedgerError::conflict(format!(
                "item code {} already exists",
                new.code
            )));
        }

        let item = Item::create(new, at)?;
        tracing::info!(code = %item.code(), name = %item.name(), "catalog item added");
        self.items.push(item);
        Ok(self.items.last().expect("just pushed"))
    }

    // ---- consumption -------------------------------------------------------

    /// Record consumption of `quantity` units against the item with `code`.
    ///
    /// On success the item is decremented, stamped, and exactly one
    /// [`UsageRecord`] is appended; the new remaining quantity is returned.
    /// On any failure nothing is mutated.
    pub fn record_usage(
        &mut self,
        code: &ItemCode,
        quantity: u32,
        used_by: &str,
        department: Department,
        remarks: &str,
        at: DateTime<Utc>,
    ) -> LedgerResult<u32> {
        if used_by.trim().is_empty() {
            return Err(LedgerError::validation("acting user cannot be empty"));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.code() == code)
            .ok_or_else(|| LedgerError::not_found(format!("item {code}")))?;

        // Snapshot identity before the decrement so the audit row is
        // truthful even if the catalog entry is later corrected.
        let item_code = item.code().clone();
        let item_name = item.name().to_string();

        let remaining = item.consume(quantity, at)?;

        self.usage_log.push(UsageRecord {
            recorded_at: at,
            item_code,
            item_name: item_name.clone(),
            quantity,
            used_by: used_by.trim().to_string(),
            department,
            remarks: remarks.to_string(),
        });

        tracing::info!(
            code = %code,
            item = %item_name,
            quantity,
            remaining,
            "usage recorded"
        );
        Ok(remaining)
    }

    /// Administrative overwrite of an item's quantity, threshold and location.
    ///
    /// Corrections are not consumption: no usage record is appended. The
    /// before/after quantities are traced instead.
    pub fn update_stock(
        &mut self,
        code: &ItemCode,
        new_quantity: u32,
        new_min_stock: u32,
        new_location: &str,
        at: DateTime<Utc>,
    ) -> LedgerResult<()> {
        let location = new_location.trim();
        if location.is_empty() {
            return Err(LedgerError::validation("location cannot be empty"));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.code() == code)
            .ok_or_else(|| LedgerError::not_found(format!("item {code}")))?;

        let previous_quantity = item.quantity();
        item.correct(new_quantity, new_min_stock, location, at);

        tracing::info!(
            code = %code,
            previous_quantity,
            new_quantity,
            new_min_stock,
            "stock corrected"
        );
        Ok(())
    }

    // ---- purchase orders ---------------------------------------------------

    /// File a replenishment request: pending approval, no supplier yet.
    pub fn request_order(
        &mut self,
        item_name: &str,
        quantity: u32,
        urgency: Urgency,
        requested_by: &str,
        today: NaiveDate,
    ) -> LedgerResult<OrderNumber> {
        let number = self.peek_order_number();
        let order =
            PurchaseOrder::request(number, today, item_name, quantity, urgency, requested_by)?;
        self.push_order(order);
        Ok(number)
    }

    /// Directly create an approved order with a known supplier.
    pub fn create_order(
        &mut self,
        item_name: &str,
        quantity: u32,
        supplier: &str,
        requested_by: &str,
        today: NaiveDate,
    ) -> LedgerResult<OrderNumber> {
        let number = self.peek_order_number();
        let order =
            PurchaseOrder::create(number, today, item_name, quantity, supplier, requested_by)?;
        self.push_order(order);
        Ok(number)
    }

    /// Approve a pending order, optionally assigning the supplier.
    pub fn approve_order(
        &mut self,
        number: OrderNumber,
        supplier: Option<String>,
    ) -> LedgerResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.number() == number)
            .ok_or_else(|| LedgerError::not_found(format!("purchase order {number}")))?;

        order.approve(supplier)?;
        tracing::info!(order = %number, "purchase order approved");
        Ok(())
    }

    /// The number the next created order will receive. Consumed only when an
    /// order is actually pushed, so failed validations leave no gap.
    fn peek_order_number(&self) -> OrderNumber {
        self.next_order_number
            .unwrap_or(OrderNumber::new(ORDER_NUMBER_BASE))
    }

    fn push_order(&mut self, order: PurchaseOrder) {
        tracing::info!(
            order = %order.number(),
            item = %order.item_name(),
            status = %order.status(),
            "purchase order recorded"
        );
        self.next_order_number = Some(order.number().next());
        self.orders.push(order);
    }

    // ---- derived queries ---------------------------------------------------

    /// Items at or below their minimum threshold, evaluated on demand.
    pub fn low_stock_alerts(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| i.is_low_stock()).collect()
    }

    /// Items whose expiry falls within `window_days` of `today` (inclusive;
    /// already-expired items are included).
    pub fn expiring_soon(&self, today: NaiveDate, window_days: i64) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.expires_within(today, window_days))
            .collect()
    }

    /// The full consumption audit trail, in append order.
    pub fn usage_log(&self) -> &[UsageRecord] {
        &self.usage_log
    }

    /// All purchase orders, in creation order.
    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.orders
    }
}
