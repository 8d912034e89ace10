//! Sell-by countdown.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Days remaining before an item's sell-by date.
///
/// Goes negative once the date has passed and keeps falling — there is no
/// floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// One day closer to (or further past) the sell-by date.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0 - 1)
    }

    /// Whether the sell-by date is today or already behind us (`<= 0`).
    pub fn is_past_due(&self) -> bool {
        self.0 <= 0
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
