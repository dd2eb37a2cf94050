//! Thread-safe ledger handle
//!
//! Publishes immutable ledger snapshots. A toggle computes the next state
//! from a snapshot and only swaps it in if no other writer got there first.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::MealItem;
use super::SelectionLedger;

/// Shared, atomically updated selection ledger
#[derive(Debug, Default)]
pub struct SharedLedger {
    current: RwLock<Arc<SelectionLedger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<SelectionLedger> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Toggle an item and return the published state
    pub fn toggle(&self, item: &MealItem) -> Arc<SelectionLedger> {
        loop {
            let observed = self.snapshot();
            let next = Arc::new(observed.toggle(item));
            if let Some(published) = self.compare_and_swap(&observed, next) {
                return published;
            }
        }
    }

    /// Reset to an empty ledger
    pub fn clear(&self) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(SelectionLedger::new());
    }

    fn compare_and_swap(
        &self,
        expected: &Arc<SelectionLedger>,
        next: Arc<SelectionLedger>,
    ) -> Option<Arc<SelectionLedger>> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if !Arc::ptr_eq(&guard, expected) {
            return None;
        }
        *guard = Arc::clone(&next);
        Some(next)
    }
}
