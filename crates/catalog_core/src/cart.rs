//! Copy-on-write cart ledger.
//!
//! Each id maps to the snapshots added under it; the snapshot count is the
//! held quantity. Keys are kept in first-insertion order and are never
//! removed, so an id drained by `remove` stays in the ledger at quantity 0.

use std::sync::Arc;

use indexmap::IndexMap;
use shared::domain::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    entries: Arc<IndexMap<ItemId, Vec<Item>>>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a ledger holding one more snapshot of `item`.
    #[must_use]
    pub fn add(&self, item: &Item) -> Self {
        let mut entries = (*self.entries).clone();
        entries.entry(item.id).or_default().push(item.clone());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Returns a ledger with the latest snapshot of `item.id` dropped. Unknown
    /// ids and ids already at quantity 0 give back an identical ledger.
    #[must_use]
    pub fn remove(&self, item: &Item) -> Self {
        match self.entries.get(&item.id) {
            Some(held) if !held.is_empty() => {
                let mut entries = (*self.entries).clone();
                if let Some(held) = entries.get_mut(&item.id) {
                    held.pop();
                }
                Self {
                    entries: Arc::new(entries),
                }
            }
            _ => self.clone(),
        }
    }

    pub fn quantity(&self, id: ItemId) -> usize {
        self.entries.get(&id).map_or(0, Vec::len)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of ids ever added, including those at quantity 0.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (ItemId, &[Item])> {
        self.entries.iter().map(|(id, held)| (*id, held.as_slice()))
    }

    /// Every held snapshot, flattened in key order then append order.
    pub fn held_items(&self) -> impl Iterator<Item = &Item> {
        self.entries.values().flatten()
    }

    pub fn latest_snapshot(&self, id: ItemId) -> Option<&Item> {
        self.entries.get(&id).and_then(|held| held.last())
    }

    /// Sum of the `id` field over every held snapshot.
    ///
    /// Items carry no price; the catalog's "total" has always been this id sum.
    /// Summed as `i128` so any number of `i64` ids cannot overflow in practice.
    pub fn aggregate_metric(&self) -> i128 {
        self.held_items().map(|item| i128::from(item.id.0)).sum()
    }
}

#[cfg(test)]
#[path = "tests/cart_tests.rs"]
mod tests;
