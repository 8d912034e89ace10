//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the value objects shared by the inventory rules, including the
//! single home of the quality clamp logic.

pub mod quality;
pub mod sell_in;
pub mod value_object;

pub use quality::{MAX_QUALITY, MIN_QUALITY, Quality};
pub use sell_in::SellIn;
pub use value_object::ValueObject;
