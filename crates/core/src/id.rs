//! Strongly-typed identifiers used across the ledger.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Longest accepted item code. Codes are short human-assigned labels
/// ("MED003", "SUP001"); anything longer is a data-entry mistake.
const MAX_ITEM_CODE_LEN: usize = 32;

/// Base for purchase order numbering. The first order in a session is
/// `PO1001`, matching the numbering the ward staff already know.
pub const ORDER_NUMBER_BASE: u32 = 1001;

/// Stable, human-assigned identifier of a catalog item (e.g. "MED003").
///
/// Item codes are the selection key for every mutating operation; display
/// names are resolved to a code through an explicit fallible lookup instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

impl ItemCode {
    /// Validate and construct a code from raw input.
    pub fn new(code: impl AsRef<str>) -> Result<Self, LedgerError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(LedgerError::invalid_id("item code cannot be empty"));
        }
        if code.len() > MAX_ITEM_CODE_LEN {
            return Err(LedgerError::invalid_id(format!(
                "item code exceeds {MAX_ITEM_CODE_LEN} characters"
            )));
        }
        if code.chars().any(|c| c.is_whitespace()) {
            return Err(LedgerError::invalid_id(
                "item code cannot contain whitespace",
            ));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Sequential purchase order number, rendered with the literal `PO` prefix
/// ("PO1001"). Numbers are assigned by the ledger from a monotonic counter
/// seeded at [`ORDER_NUMBER_BASE`]; they are gap-free within one session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u32);

impl OrderNumber {
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The number that follows this one in the sequence.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PO{}", self.0)
    }
}

impl FromStr for OrderNumber {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("PO")
            .ok_or_else(|| LedgerError::invalid_id(format!("order number '{s}' must start with PO")))?;
        let n: u32 = digits
            .parse()
            .map_err(|e| LedgerError::invalid_id(format!("order number '{s}': {e}")))?;
        Ok(Self(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_code_trims_and_accepts_short_labels() {
        let code = ItemCode::new("  MED003 ").unwrap();
        assert_eq!(code.as_str(), "MED003");
        assert_eq!(code.to_string(), "MED003");
    }

    #[test]
    fn item_code_rejects_empty_and_embedded_whitespace() {
        assert!(matches!(ItemCode::new("   "), Err(LedgerError::InvalidId(_))));
        assert!(matches!(
            ItemCode::new("MED 003"),
            Err(LedgerError::InvalidId(_))
        ));
    }

    #[test]
    fn order_number_round_trips_through_display() {
        let n = OrderNumber::new(ORDER_NUMBER_BASE);
        assert_eq!(n.to_string(), "PO1001");
        assert_eq!("PO1001".parse::<OrderNumber>().unwrap(), n);
        assert_eq!(n.next().to_string(), "PO1002");
    }

    #[test]
    fn order_number_rejects_malformed_input() {
        assert!("1001".parse::<OrderNumber>().is_err());
        assert!("POabc".parse::<OrderNumber>().is_err());
    }
}
