use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use wardstock_core::{ItemCode, LedgerError, LedgerResult};

/// Catalog category of a stocked item.
///
/// The named variants cover everything the ward stocks today; `Other`
/// preserves free-text input without widening the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemCategory {
    Medicine,
    Supply,
    EmergencyMedicine,
    ControlledMedicine,
    Equipment,
    Other(String),
}

impl ItemCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ItemCategory::Medicine => "Medicine",
            ItemCategory::Supply => "Supply",
            ItemCategory::EmergencyMedicine => "Emergency Medicine",
            ItemCategory::ControlledMedicine => "Controlled Medicine",
            ItemCategory::Equipment => "Equipment",
            ItemCategory::Other(s) => s,
        }
    }
}

impl From<&str> for ItemCategory {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Medicine" => ItemCategory::Medicine,
            "Supply" => ItemCategory::Supply,
            "Emergency Medicine" => ItemCategory::EmergencyMedicine,
            "Controlled Medicine" => ItemCategory::ControlledMedicine,
            "Equipment" => ItemCategory::Equipment,
            other => ItemCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for ItemCategory {
    fn from(s: String) -> Self {
        ItemCategory::from(s.as_str())
    }
}

impl From<ItemCategory> for String {
    fn from(c: ItemCategory) -> Self {
        c.as_str().to_string()
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields for a catalog entry about to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub code: ItemCode,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: u32,
    pub min_stock: u32,
    pub unit: String,
    pub expiry: Option<NaiveDate>,
    pub location: String,
}

/// Catalog entry: a stocked item.
///
/// Quantity on hand is `u32`; negative stock is unrepresentable. Overdraws
/// are rejected before any arithmetic, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    code: ItemCode,
    name: String,
    category: ItemCategory,
    quantity: u32,
    min_stock: u32,
    unit: String,
    expiry: Option<NaiveDate>,
    location: String,
    last_updated: DateTime<Utc>,
}

impl Item {
    /// Validate `new` and construct the catalog entry, stamping `last_updated`.
    pub fn create(new: NewItem, at: DateTime<Utc>) -> LedgerResult<Self> {
        if new.name.trim().is_empty() {
            return Err(LedgerError::validation("item name cannot be empty"));
        }
        if new.unit.trim().is_empty() {
            return Err(LedgerError::validation("unit of measure cannot be empty"));
        }

        Ok(Self {
            code: new.code,
            name: new.name.trim().to_string(),
            category: new.category,
            quantity: new.quantity,
            min_stock: new.min_stock,
            unit: new.unit.trim().to_string(),
            expiry: new.expiry,
            location: new.location.trim().to_string(),
            last_updated: at,
        })
    }

    pub fn code(&self) -> &ItemCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &ItemCategory {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Quantity on hand is at or below the configured minimum threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Expiry date falls within `window_days` of `today`, boundary inclusive.
    /// Already-expired items count as expiring. Items without an expiry date
    /// never do.
    pub fn expires_within(&self, today: NaiveDate, window_days: i64) -> bool {
        match self.expiry {
            Some(expiry) => (expiry - today).num_days() <= window_days,
            None => false,
        }
    }

    /// Consume `quantity` units of stock.
    ///
    /// Returns the remaining quantity. Overdraws fail with
    /// `InsufficientStock` carrying the available quantity; the item is left
    /// untouched.
    pub fn consume(&mut self, quantity: u32, at: DateTime<Utc>) -> LedgerResult<u32> {
        if quantity == 0 {
            return Err(LedgerError::validation("quantity used must be at least 1"));
        }
        if self.quantity < quantity {
            return Err(LedgerError::insufficient_stock(self.quantity));
        }

        self.quantity -= quantity;
        self.last_updated = at;
        Ok(self.quantity)
    }

    /// Administrative overwrite of quantity, threshold and location.
    ///
    /// This is a correction, not a consumption: it produces no usage record.
    pub fn correct(
        &mut self,
        new_quantity: u32,
        new_min_stock: u32,
        new_location: impl Into<String>,
        at: DateTime<Utc>,
    ) {
        self.quantity = new_quantity;
        self.min_stock = new_min_stock;
        self.location = new_location.into();
        self.last_updated = at;
    }
}
