//! `wardstock-ledger` — the in-memory authority over item stock levels,
//! consumption history, and purchase requests.
//!
//! One [`InventoryLedger`] instance is constructed per interactive session
//! and owns its three collections exclusively; nothing survives a process
//! restart. Every operation is a synchronous, bounded computation over small
//! in-memory tables, and every derived query reflects current state exactly
//! (nothing is cached).

pub mod demo;
pub mod export;
pub mod ledger;
pub mod reports;

pub use ledger::{InventoryLedger, ItemFilter};
pub use reports::{DepartmentUsage, ItemUsage, LedgerOverview};
