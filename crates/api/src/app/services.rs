use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};

use wardstock_core::Clock;
use wardstock_ledger::InventoryLedger;

/// Shared application state.
///
/// One ledger per process, behind an `RwLock`: the ledger itself assumes a
/// single logical actor, so the lock is the serialized-writer boundary once
/// HTTP puts concurrent requests in front of it. The clock is injected so
/// tests can pin time.
pub struct AppServices {
    ledger: RwLock<InventoryLedger>,
    clock: Arc<dyn Clock>,
}

impl AppServices {
    pub fn new(clock: Arc<dyn Clock>, ledger: InventoryLedger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn ledger(&self) -> RwLockReadGuard<'_, InventoryLedger> {
        self.ledger.read().unwrap()
    }

    pub fn ledger_mut(&self) -> RwLockWriteGuard<'_, InventoryLedger> {
        self.ledger.write().unwrap()
    }
}
