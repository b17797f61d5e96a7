//! CSV export of the consumption audit trail.
//!
//! The column set and order are a contract with the ward's reporting
//! spreadsheet: `Date_Time, Item_ID, Item_Name, Quantity_Used, Used_By,
//! Department, Remarks`, rows in append order.

use std::io::Write;

use wardstock_core::{LedgerError, LedgerResult};
use wardstock_inventory::UsageRecord;

const HEADERS: [&str; 7] = [
    "Date_Time",
    "Item_ID",
    "Item_Name",
    "Quantity_Used",
    "Used_By",
    "Department",
    "Remarks",
];

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write the usage log as CSV to `out`.
pub fn write_usage_csv<W: Write>(records: &[UsageRecord], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADERS)?;

    for record in records {
        writer.write_record([
            record.recorded_at.format(DATE_TIME_FORMAT).to_string(),
            record.item_code.to_string(),
            record.item_name.clone(),
            record.quantity.to_string(),
            record.used_by.clone(),
            record.department.to_string(),
            record.remarks.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the usage log as an in-memory CSV document.
pub fn usage_csv_string(records: &[UsageRecord]) -> LedgerResult<String> {
    let mut buf = Vec::new();
    write_usage_csv(records, &mut buf)
        .map_err(|e| LedgerError::validation(format!("csv export failed: {e}")))?;
    String::from_utf8(buf)
        .map_err(|e| LedgerError::validation(format!("csv export produced invalid utf-8: {e}")))
}
