//! Daily report rendering.

use serde::Serialize;

use gildedrose_inventory::Item;

#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: u32,
    items: &'a [Item],
}

/// Text table for one day, followed by a blank line.
pub fn render_text_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Single-line JSON snapshot for one day, newline terminated.
pub fn render_json_day(day: u32, items: &[Item]) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(&DaySnapshot { day, items })?;
    line.push('\n');
    Ok(line)
}
