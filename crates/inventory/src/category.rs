use serde::{Deserialize, Serialize};

/// Update policy bucket for a stocked item.
///
/// A closed set: the shop recognizes a handful of names exactly and files
/// everything else under [`Category::Standard`]. Matching on the enum instead
/// of the raw name keeps the rule dispatch exhaustive and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Ordinary stock, loses quality as it ages.
    Standard,
    /// Improves with age ("Aged Brie").
    Appreciating,
    /// Never has to be sold and never changes ("Sulfuras").
    Legendary,
    /// Gains quality as the event approaches, worthless once it has passed.
    EventTicket,
    /// Degrades much faster than ordinary stock.
    Conjured,
}

impl Category {
    /// Resolve the category for an item name (exact, case-sensitive match).
    ///
    /// Unrecognized names fall back to [`Category::Standard`].
    pub fn of(name: &str) -> Self {
        match name {
            "Aged Brie" => Self::Appreciating,
            "Sulfuras, Hand of Ragnaros" => Self::Legendary,
            "Backstage passes to a TAFKAL80ETC concert" => Self::EventTicket,
            "Conjured Mana Cake" => Self::Conjured,
            _ => Self::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_names_map_to_their_categories() {
        assert_eq!(Category::of("Aged Brie"), Category::Appreciating);
        assert_eq!(Category::of("Sulfuras, Hand of Ragnaros"), Category::Legendary);
        assert_eq!(
            Category::of("Backstage passes to a TAFKAL80ETC concert"),
            Category::EventTicket
        );
        assert_eq!(Category::of("Conjured Mana Cake"), Category::Conjured);
    }

    #[test]
    fn everything_else_is_standard() {
        assert_eq!(Category::of("+5 Dexterity Vest"), Category::Standard);
        assert_eq!(Category::of("Elixir of the Mongoose"), Category::Standard);
        assert_eq!(Category::of(""), Category::Standard);
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        assert_eq!(Category::of("aged brie"), Category::Standard);
        assert_eq!(Category::of("Aged Brie "), Category::Standard);
        assert_eq!(Category::of("Backstage passes"), Category::Standard);
    }
}
