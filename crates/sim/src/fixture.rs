//! Inventories to simulate: the built-in fixture or a JSON file.

use std::path::Path;

use anyhow::Context;

use gildedrose_inventory::{Item, Shop};

/// The shop's standard opening stock.
pub fn standard_inventory() -> Vec<Item> {
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

/// Parse a JSON array of `{"name", "sell_in", "quality"}` objects and check
/// every item's quality bounds.
pub fn parse_inventory(json: &str) -> anyhow::Result<Shop> {
    let items: Vec<Item> = serde_json::from_str(json).context("malformed inventory JSON")?;
    Ok(Shop::try_new(items)?)
}

pub fn load_inventory(path: &Path) -> anyhow::Result<Shop> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory {}", path.display()))?;
    let shop = parse_inventory(&json)
        .with_context(|| format!("invalid inventory {}", path.display()))?;
    tracing::debug!(path = %path.display(), items = shop.len(), "loaded inventory");
    Ok(shop)
}
