use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wardstock_core::ItemCode;

/// Hospital department that consumed stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    GeneralWard,
    Icu,
    Emergency,
    Ot,
    Opd,
    Other(String),
}

impl Department {
    pub fn as_str(&self) -> &str {
        match self {
            Department::GeneralWard => "General Ward",
            Department::Icu => "ICU",
            Department::Emergency => "Emergency",
            Department::Ot => "OT",
            Department::Opd => "OPD",
            Department::Other(s) => s,
        }
    }
}

impl From<&str> for Department {
    fn from(s: &str) -> Self {
        match s.trim() {
            "General Ward" => Department::GeneralWard,
            "ICU" => Department::Icu,
            "Emergency" => Department::Emergency,
            "OT" => Department::Ot,
            "OPD" => Department::Opd,
            other => Department::Other(other.to_string()),
        }
    }
}

impl From<String> for Department {
    fn from(s: String) -> Self {
        Department::from(s.as_str())
    }
}

impl From<Department> for String {
    fn from(d: Department) -> Self {
        d.as_str().to_string()
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the consumption audit trail.
///
/// Appended exactly once per successful consumption; never mutated or
/// deleted afterwards. The item code and name are snapshots taken at
/// decrement time, so the trail stays truthful even if the catalog entry is
/// later corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub recorded_at: DateTime<Utc>,
    pub item_code: ItemCode,
    pub item_name: String,
    pub quantity: u32,
    pub used_by: String,
    pub department: Department,
    pub remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_display_strings_round_trip() {
        for (dept, s) in [
            (Department::GeneralWard, "General Ward"),
            (Department::Icu, "ICU"),
            (Department::Emergency, "Emergency"),
            (Department::Ot, "OT"),
            (Department::Opd, "OPD"),
        ] {
            assert_eq!(dept.as_str(), s);
            assert_eq!(Department::from(s), dept);
        }
    }

    #[test]
    fn unknown_department_is_preserved_as_other() {
        let dept = Department::from("Day Care");
        assert_eq!(dept, Department::Other("Day Care".to_string()));
        assert_eq!(dept.as_str(), "Day Care");
    }
}
