//! Demo seed catalog.
//!
//! The eight items the ward's pilot deployment started with. Used by the
//! demo server and as a realistic fixture in tests and benches.

use chrono::{DateTime, NaiveDate, Utc};

use wardstock_core::{ItemCode, LedgerResult};
use wardstock_inventory::{ItemCategory, NewItem};

use crate::ledger::InventoryLedger;

/// The seed catalog entries, in their canonical order.
pub fn demo_catalog() -> Vec<NewItem> {
    let entry = |code: &str,
                 name: &str,
                 category: ItemCategory,
                 quantity: u32,
                 min_stock: u32,
                 unit: &str,
                 expiry: (i32, u32, u32),
                 location: &str| NewItem {
        code: ItemCode::new(code).expect("seed catalog codes are valid"),
        name: name.to_string(),
        category,
        quantity,
        min_stock,
        unit: unit.to_string(),
        expiry: NaiveDate::from_ymd_opt(expiry.0, expiry.1, expiry.2),
        location: location.to_string(),
    };

    vec![
        entry("MED001", "Paracetamol 500mg", ItemCategory::Medicine, 500, 200, "Tablet", (2026, 5, 15), "Pharmacy"),
        entry("MED002", "Injection Ceftriaxone", ItemCategory::Medicine, 120, 50, "Vial", (2025, 12, 20), "Pharmacy"),
        entry("SUP001", "Disposable Syringes", ItemCategory::Supply, 1500, 500, "Piece", (2027, 1, 10), "Medical Store"),
        entry("SUP002", "Surgical Gloves", ItemCategory::Supply, 2000, 800, "Pair", (2026, 8, 25), "Medical Store"),
        entry("SUP003", "Gauze Dressings", ItemCategory::Supply, 800, 300, "Packet", (2026, 3, 30), "Medical Store"),
        entry("MED003", "Injection Adrenaline", ItemCategory::EmergencyMedicine, 50, 20, "Vial", (2025, 11, 30), "Emergency Ward"),
        entry("SUP004", "IV Cannula", ItemCategory::Supply, 600, 200, "Piece", (2027, 2, 15), "Medical Store"),
        entry("MED004", "Morphine 10mg", ItemCategory::ControlledMedicine, 30, 10, "Vial", (2026, 6, 10), "Pharmacy"),
    ]
}

/// A ledger pre-loaded with the demo catalog, all entries stamped `at`.
pub fn seeded_ledger(at: DateTime<Utc>) -> LedgerResult<InventoryLedger> {
    let mut ledger = InventoryLedger::new();
    for item in demo_catalog() {
        ledger.add_item(item, at)?;
    }
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemFilter;
    use chrono::TimeZone;

    #[test]
    fn seeded_ledger_holds_the_eight_demo_items() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let ledger = seeded_ledger(at).unwrap();

        let items = ledger.list_items(&ItemFilter::default());
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].code().as_str(), "MED001");
        assert_eq!(items[5].name(), "Injection Adrenaline");
        assert_eq!(items[5].quantity(), 50);
        assert_eq!(items[5].min_stock(), 20);

        // Nothing in the seed starts below its threshold.
        assert!(ledger.low_stock_alerts().is_empty());
    }
}
