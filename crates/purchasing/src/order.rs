use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use wardstock_core::{LedgerError, LedgerResult, OrderNumber};

/// How badly the requester needs the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Urgent,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent",
            Urgency::Emergency => "Emergency",
        }
    }
}

impl core::fmt::Display for Urgency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Urgency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Normal" => Ok(Urgency::Normal),
            "Urgent" => Ok(Urgency::Urgent),
            "Emergency" => Ok(Urgency::Emergency),
            other => Err(LedgerError::validation(format!(
                "urgency must be Normal, Urgent or Emergency (got '{other}')"
            ))),
        }
    }
}

/// Purchase order status lifecycle.
///
/// Renders to the strings the ward's report tables already show:
/// "Urgent - Pending Approval", "Approved".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "urgency")]
pub enum OrderStatus {
    PendingApproval(Urgency),
    Approved,
}

impl OrderStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::PendingApproval(_))
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::PendingApproval(urgency) => {
                write!(f, "{urgency} - Pending Approval")
            }
            OrderStatus::Approved => f.write_str("Approved"),
        }
    }
}

/// A recorded request to replenish stock.
///
/// The item name is free text on purpose: staff request items the catalog
/// does not stock yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    number: OrderNumber,
    date: NaiveDate,
    item_name: String,
    quantity: u32,
    supplier: Option<String>,
    status: OrderStatus,
    requested_by: String,
}

impl PurchaseOrder {
    /// A staff request: no supplier yet, pending approval at the given urgency.
    pub fn request(
        number: OrderNumber,
        date: NaiveDate,
        item_name: impl Into<String>,
        quantity: u32,
        urgency: Urgency,
        requested_by: impl Into<String>,
    ) -> LedgerResult<Self> {
        Self::build(
            number,
            date,
            item_name,
            quantity,
            None,
            OrderStatus::PendingApproval(urgency),
            requested_by,
        )
    }

    /// A direct administrative create: supplier known, approved immediately.
    pub fn create(
        number: OrderNumber,
        date: NaiveDate,
        item_name: impl Into<String>,
        quantity: u32,
        supplier: impl Into<String>,
        requested_by: impl Into<String>,
    ) -> LedgerResult<Self> {
        let supplier = supplier.into();
        if supplier.trim().is_empty() {
            return Err(LedgerError::validation("supplier cannot be empty"));
        }
        Self::build(
            number,
            date,
            item_name,
            quantity,
            Some(supplier.trim().to_string()),
            OrderStatus::Approved,
            requested_by,
        )
    }

    fn build(
        number: OrderNumber,
        date: NaiveDate,
        item_name: impl Into<String>,
        quantity: u32,
        supplier: Option<String>,
        status: OrderStatus,
        requested_by: impl Into<String>,
    ) -> LedgerResult<Self> {
        let item_name = item_name.into();
        let requested_by = requested_by.into();

        if item_name.trim().is_empty() {
            return Err(LedgerError::validation("item name cannot be empty"));
        }
        if quantity == 0 {
            return Err(LedgerError::validation("quantity must be at least 1"));
        }
        if requested_by.trim().is_empty() {
            return Err(LedgerError::validation("requesting user cannot be empty"));
        }

        Ok(Self {
            number,
            date,
            item_name: item_name.trim().to_string(),
            quantity,
            supplier,
            status,
            requested_by: requested_by.trim().to_string(),
        })
    }

    pub fn number(&self) -> OrderNumber {
        self.number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Supplier if one has been assigned. Rendered as "Pending" until then.
    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    pub fn supplier_display(&self) -> &str {
        self.supplier.as_deref().unwrap_or("Pending")
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn requested_by(&self) -> &str {
        &self.requested_by
    }

    /// Advance a pending order to Approved, optionally assigning the supplier.
    ///
    /// Invariant: only pending orders can be approved.
    pub fn approve(&mut self, supplier: Option<String>) -> LedgerResult<()> {
        if !self.status.is_pending() {
            return Err(LedgerError::conflict(format!(
                "purchase order {} is already approved",
                self.number
            )));
        }

        if let Some(supplier) = supplier {
            if supplier.trim().is_empty() {
                return Err(LedgerError::validation("supplier cannot be empty"));
            }
            self.supplier = Some(supplier.trim().to_string());
        }
        self.status = OrderStatus::Approved;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_number() -> OrderNumber {
        OrderNumber::new(1001)
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn request_starts_pending_with_no_supplier() {
        let po = PurchaseOrder::request(
            test_number(),
            test_date(),
            "Injection Insulin",
            100,
            Urgency::Urgent,
            "Dr. Sharma",
        )
        .unwrap();

        assert_eq!(po.status(), OrderStatus::PendingApproval(Urgency::Urgent));
        assert_eq!(po.status().to_string(), "Urgent - Pending Approval");
        assert_eq!(po.supplier(), None);
        assert_eq!(po.supplier_display(), "Pending");
    }

    #[test]
    fn direct_create_is_approved_immediately() {
        let po = PurchaseOrder::create(
            test_number(),
            test_date(),
            "Surgical Gloves",
            500,
            "MedSupply Co",
            "Hospital Admin1",
        )
        .unwrap();

        assert_eq!(po.status(), OrderStatus::Approved);
        assert_eq!(po.status().to_string(), "Approved");
        assert_eq!(po.supplier(), Some("MedSupply Co"));
    }

    #[test]
    fn approve_assigns_supplier_and_moves_status() {
        let mut po = PurchaseOrder::request(
            test_number(),
            test_date(),
            "IV Cannula",
            200,
            Urgency::Normal,
            "Dr. Sharma",
        )
        .unwrap();

        po.approve(Some("City Pharma".to_string())).unwrap();
        assert_eq!(po.status(), OrderStatus::Approved);
        assert_eq!(po.supplier(), Some("City Pharma"));
    }

    #[test]
    fn cannot_approve_twice() {
        let mut po = PurchaseOrder::create(
            test_number(),
            test_date(),
            "Gauze Dressings",
            300,
            "MedSupply Co",
            "Hospital Admin1",
        )
        .unwrap();

        let err = po.approve(None).unwrap_err();
        match err {
            LedgerError::Conflict(msg) if msg.contains("already approved") => {}
            other => panic!("expected Conflict for double approval, got {other:?}"),
        }
    }

    #[test]
    fn zero_quantity_and_blank_fields_are_rejected() {
        assert!(matches!(
            PurchaseOrder::request(
                test_number(),
                test_date(),
                "Syringes",
                0,
                Urgency::Normal,
                "Dr. Sharma"
            ),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            PurchaseOrder::request(
                test_number(),
                test_date(),
                "  ",
                10,
                Urgency::Normal,
                "Dr. Sharma"
            ),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            PurchaseOrder::create(
                test_number(),
                test_date(),
                "Syringes",
                10,
                "  ",
                "Hospital Admin1"
            ),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn pending_status_strings_cover_all_urgencies() {
        for (urgency, s) in [
            (Urgency::Normal, "Normal - Pending Approval"),
            (Urgency::Urgent, "Urgent - Pending Approval"),
            (Urgency::Emergency, "Emergency - Pending Approval"),
        ] {
            assert_eq!(OrderStatus::PendingApproval(urgency).to_string(), s);
        }
    }
}
