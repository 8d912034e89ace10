use serde::{Deserialize, Serialize};

use gildedrose_core::{Quality, SellIn, ValueObject};

use crate::category::Category;

/// A single stocked item: the display name plus the two fields the nightly
/// update rewrites.
///
/// Construction performs no validation — any `(name, sell_in, quality)`
/// triple is accepted, including qualities outside the bounded range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: SellIn,
    quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in: SellIn::new(sell_in),
            quality: Quality::new(quality),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> SellIn {
        self.sell_in
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Category the nightly rules file this item under, resolved by exact
    /// name match on every lookup.
    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }

    /// Copy of this item carrying the post-update countdown and quality.
    pub(crate) fn updated(&self, sell_in: SellIn, quality: Quality) -> Self {
        Self {
            name: self.name.clone(),
            sell_in,
            quality,
        }
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
