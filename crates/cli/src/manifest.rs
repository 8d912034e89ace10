//! Opening stock: the built-in list and the JSON manifest loader.

use std::fs;
use std::path::Path;

use thiserror::Error;

use gildedrose_inventory::Item;

/// Failure to read or parse a stock manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load an item list from a JSON manifest: an array of
/// `{ "name", "sell_in", "quality" }` objects.
pub fn load(path: &Path) -> Result<Vec<Item>, ManifestError> {
    parse(&fs::read_to_string(path)?)
}

fn parse(raw: &str) -> Result<Vec<Item>, ManifestError> {
    Ok(serde_json::from_str(raw)?)
}

/// The shop's classic opening stock, used when no manifest is given.
pub fn opening_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
