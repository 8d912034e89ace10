//! The inventory collection and the advance-one-day operation.

use serde::{Deserialize, Serialize};

use crate::aging::age_item;
use crate::item::Item;

/// Ordered collection of stocked items.
///
/// Owns the item list between nightly updates. [`Inventory::advance_day`]
/// transitions every item by exactly one simulated day — same order, same
/// count, nothing added or removed. Callers drive multi-day simulations by
/// calling it once per day, and are expected to serialize access if they
/// share an inventory across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance every item by one simulated day and return the updated list.
    pub fn advance_day(&mut self) -> &[Item] {
        self.items = self.items.iter().map(age_item).collect();
        &self.items
    }
}
