//! Usage reports derived from the audit trail.
//!
//! Pure aggregations over the current log; nothing is cached. Grouped
//! totals keep first-appearance order so equal totals tie-break stably.

use serde::Serialize;

use wardstock_inventory::Department;

use crate::ledger::InventoryLedger;

/// Total quantity consumed by one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentUsage {
    pub department: Department,
    pub total_quantity: u64,
}

/// Total quantity consumed of one item, grouped by name snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemUsage {
    pub item_name: String,
    pub total_quantity: u64,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerOverview {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub usage_entries: usize,
    pub pending_orders: usize,
}

impl InventoryLedger {
    /// Total quantity consumed per department, in first-appearance order.
    pub fn usage_by_department(&self) -> Vec<DepartmentUsage> {
        let mut totals: Vec<DepartmentUsage> = Vec::new();

        for record in self.usage_log() {
            match totals
                .iter_mut()
                .find(|t| t.department == record.department)
            {
                Some(entry) => entry.total_quantity += u64::from(record.quantity),
                None => totals.push(DepartmentUsage {
                    department: record.department.clone(),
                    total_quantity: u64::from(record.quantity),
                }),
            }
        }

        totals
    }

    /// The `limit` most-consumed items by total quantity, descending.
    ///
    /// Grouping is by the name snapshot in the log. The sort is stable, so
    /// items with equal totals keep their first-appearance order.
    pub fn top_used_items(&self, limit: usize) -> Vec<ItemUsage> {
        let mut totals: Vec<ItemUsage> = Vec::new();

        for record in self.usage_log() {
            match totals.iter_mut().find(|t| t.item_name == record.item_name) {
                Some(entry) => entry.total_quantity += u64::from(record.quantity),
                None => totals.push(ItemUsage {
                    item_name: record.item_name.clone(),
                    total_quantity: u64::from(record.quantity),
                }),
            }
        }

        totals.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
        totals.truncate(limit);
        totals
    }

    /// Counters for the overview dashboard.
    pub fn overview(&self) -> LedgerOverview {
        LedgerOverview {
            total_items: self.list_items(&crate::ItemFilter::default()).len(),
            low_stock_items: self.low_stock_alerts().len(),
            usage_entries: self.usage_log().len(),
            pending_orders: self
                .orders()
                .iter()
                .filter(|o| o.status().is_pending())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wardstock_core::ItemCode;
    use wardstock_inventory::{ItemCategory, NewItem};
    use wardstock_purchasing::Urgency;

    fn test_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn ledger_with_usage() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        for (code, name, qty) in [
            ("MED001", "Paracetamol 500mg", 500),
            ("SUP001", "Disposable Syringes", 1500),
            ("SUP002", "Surgical Gloves", 2000),
        ] {
            ledger
                .add_item(
                    NewItem {
                        code: ItemCode::new(code).unwrap(),
                        name: name.to_string(),
                        category: ItemCategory::Supply,
                        quantity: qty,
                        min_stock: 100,
                        unit: "Piece".to_string(),
                        expiry: None,
                        location: "Medical Store".to_string(),
                    },
                    test_time(),
                )
                .unwrap();
        }

        let code = |s: &str| ItemCode::new(s).unwrap();
        let usages = [
            ("MED001", 40, Department::Icu),
            ("SUP001", 100, Department::GeneralWard),
            ("MED001", 20, Department::Icu),
            ("SUP002", 60, Department::Ot),
            ("SUP001", 30, Department::Icu),
        ];
        for (item, qty, dept) in usages {
            ledger
                .record_usage(&code(item), qty, "Sister Priya", dept, "", test_time())
                .unwrap();
        }
        ledger
    }

    #[test]
    fn usage_by_department_totals_in_first_appearance_order() {
        let ledger = ledger_with_usage();
        let totals = ledger.usage_by_department();

        assert_eq!(
            totals,
            vec![
                DepartmentUsage {
                    department: Department::Icu,
                    total_quantity: 90,
                },
                DepartmentUsage {
                    department: Department::GeneralWard,
                    total_quantity: 100,
                },
                DepartmentUsage {
                    department: Department::Ot,
                    total_quantity: 60,
                },
            ]
        );
    }

    #[test]
    fn top_used_items_truncates_and_breaks_ties_stably() {
        let ledger = ledger_with_usage();

        // Paracetamol and gloves are tied at 60; paracetamol appeared first
        // in the log, so it stays ahead.
        let top = ledger.top_used_items(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].item_name, "Disposable Syringes");
        assert_eq!(top[0].total_quantity, 130);
        assert_eq!(top[1].item_name, "Paracetamol 500mg");
        assert_eq!(top[1].total_quantity, 60);
    }

    #[test]
    fn overview_counts_reflect_current_state() {
        let mut ledger = ledger_with_usage();
        let today = test_time().date_naive();
        ledger
            .request_order("Injection Insulin", 50, Urgency::Normal, "Dr. Sharma", today)
            .unwrap();
        ledger
            .create_order("Bandages", 100, "MedSupply Co", "Hospital Admin1", today)
            .unwrap();

        let overview = ledger.overview();
        assert_eq!(overview.total_items, 3);
        assert_eq!(overview.usage_entries, 5);
        assert_eq!(overview.pending_orders, 1);
        assert_eq!(overview.low_stock_items, 0);
    }
}
