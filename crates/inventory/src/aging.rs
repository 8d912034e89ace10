//! Nightly update rules, one per category.
//!
//! Every rule reads expiry and thresholds from the item as it stood *before*
//! tonight's countdown decrement, then writes the decremented countdown and
//! the new quality together.

use gildedrose_core::Quality;

use crate::category::Category;
use crate::item::Item;

const STANDARD_DECAY: i32 = 1;
const APPRECIATION_GAIN: i32 = 1;
const CONJURED_DECAY: i32 = 4;

/// Transition a single item by one simulated day.
pub fn age_item(item: &Item) -> Item {
    match item.category() {
        Category::Standard => age_standard(item),
        Category::Appreciating => age_appreciating(item),
        Category::Legendary => age_legendary(item),
        Category::EventTicket => age_event_ticket(item),
        Category::Conjured => age_conjured(item),
    }
}

fn age_standard(item: &Item) -> Item {
    let decay = if item.sell_in().is_past_due() {
        2 * STANDARD_DECAY
    } else {
        STANDARD_DECAY
    };

    item.updated(item.sell_in().decrement(), item.quality().lower(decay))
}

fn age_appreciating(item: &Item) -> Item {
    let gain = if item.sell_in().is_past_due() {
        2 * APPRECIATION_GAIN
    } else {
        APPRECIATION_GAIN
    };

    item.updated(item.sell_in().decrement(), item.quality().raise(gain))
}

/// Legendary stock never has to be sold and never alters: countdown and
/// quality both stay put, whatever values it was seeded with.
fn age_legendary(item: &Item) -> Item {
    item.clone()
}

fn age_event_ticket(item: &Item) -> Item {
    let sell_in = item.sell_in();

    if sell_in.is_past_due() {
        // Worthless once the event has happened. An unconditional reset, not
        // a decrement; the countdown still runs.
        return item.updated(sell_in.decrement(), Quality::new(0));
    }

    let gain = match sell_in.value() {
        ..=5 => 3,
        6..=10 => 2,
        _ => 1,
    };

    item.updated(sell_in.decrement(), item.quality().raise(gain))
}

fn age_conjured(item: &Item) -> Item {
    let decay = if item.sell_in().is_past_due() {
        2 * CONJURED_DECAY
    } else {
        CONJURED_DECAY
    };

    item.updated(item.sell_in().decrement(), item.quality().lower(decay))
}
