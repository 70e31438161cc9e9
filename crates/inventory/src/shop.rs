use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::Item;
use crate::quality;

/// The shop's inventory, in stocking order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shop {
    items: Vec<Item>,
}

impl Shop {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build a shop from untrusted items, rejecting the first one whose
    /// quality is out of bounds.
    pub fn try_new(items: Vec<Item>) -> DomainResult<Self> {
        for (index, item) in items.iter().enumerate() {
            item.validate().map_err(|e| {
                DomainError::invariant(format!("item {index} ({}): {e}", item.name()))
            })?;
        }
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) {
        for item in &mut self.items {
            let category = Category::of(item);
            let (sell_in, quality) = (item.sell_in(), item.quality());
            quality::update_as(category, item);
            tracing::trace!(
                name = item.name(),
                %category,
                sell_in_before = sell_in,
                sell_in_after = item.sell_in(),
                quality_before = quality,
                quality_after = item.quality(),
                "item aged"
            );
        }
        tracing::debug!(items = self.items.len(), "inventory aged one day");
    }

    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }
}

impl From<Vec<Item>> for Shop {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
