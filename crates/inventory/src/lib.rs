//! Inventory aging domain module.
//!
//! Business rules for the nightly quality update, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod quality;
pub mod shop;

pub use category::{Category, classify};
pub use item::Item;
pub use quality::{MAX_QUALITY, MIN_QUALITY, clamp_quality, update, update_as};
pub use shop::Shop;
