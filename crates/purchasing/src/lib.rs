//! Purchasing domain module (purchase orders).
//!
//! This crate contains the business rules for replenishment orders,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Orders reference items by display name and are deliberately
//! not linked back to catalog identifiers.

pub mod order;

pub use order::{OrderStatus, PurchaseOrder, Urgency};
