use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;
use crate::quality::{MAX_QUALITY, MIN_QUALITY};

/// A stocked item: name, days left to sell, and quality.
///
/// `name` is fixed at construction. `sell_in` and `quality` only change through
/// the updater in [`crate::quality`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl ValueObject for Item {}

impl Item {
    /// Unchecked constructor.
    ///
    /// Callers are responsible for starting non-legendary items inside the
    /// quality bounds; use [`Item::try_new`] for untrusted input.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Checked constructor: rejects non-legendary items whose quality is
    /// outside `MIN_QUALITY..=MAX_QUALITY`.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if Category::of(self).is_legendary() {
            return Ok(());
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::validation(format!(
                "quality {} of {:?} is outside {MIN_QUALITY}..={MAX_QUALITY}",
                self.quality, self.name
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub(crate) fn set_sell_in(&mut self, sell_in: i32) {
        self.sell_in = sell_in;
    }

    pub(crate) fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
