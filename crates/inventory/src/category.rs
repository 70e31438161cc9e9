//! Item categories and the name-based classifier.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Concert pass whose value rises until the event, then collapses.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Legendary item: never sold, never decays.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Prefix marking conjured items (trailing space included).
pub const CONJURED_PREFIX: &str = "Conjured ";

/// Aging rule an item follows.
///
/// Closed set: every name maps to exactly one of these, defaulting to
/// [`Category::Normal`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    AgingImproves,
    Legendary,
    EventPass,
    Conjured,
}

impl Category {
    pub fn of(item: &Item) -> Self {
        classify(item.name())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgingImproves => "aging_improves",
            Category::Legendary => "legendary",
            Category::EventPass => "event_pass",
            Category::Conjured => "conjured",
        }
    }

    /// Legendary items are exempt from the quality bounds.
    pub fn is_legendary(&self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an item name to its category.
///
/// Exact names are checked first, then the conjured prefix. Anything else
/// (including the empty string) is [`Category::Normal`].
pub fn classify(name: &str) -> Category {
    match name {
        AGED_BRIE => Category::AgingImproves,
        BACKSTAGE_PASS => Category::EventPass,
        SULFURAS => Category::Legendary,
        other if other.starts_with(CONJURED_PREFIX) => Category::Conjured,
        _ => Category::Normal,
    }
}
