//! Day-by-day inventory simulator.
//!
//! Prints the inventory before each simulated day, either as the classic
//! `name, sellIn, quality` text table or as JSON snapshots.

pub mod config;
pub mod fixture;
pub mod report;

use std::io::Write;

use anyhow::Context;

use gildedrose_inventory::Shop;

pub use config::{ConfigError, OutputFormat, SimConfig};

/// Build the configured inventory and write `config.days` daily reports.
pub fn run(config: &SimConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut shop = match &config.inventory_path {
        Some(path) => fixture::load_inventory(path)?,
        None => Shop::new(fixture::standard_inventory()),
    };

    tracing::info!(
        days = config.days,
        items = shop.len(),
        output = ?config.output,
        "starting simulation"
    );

    for day in 0..config.days {
        let rendered = match config.output {
            OutputFormat::Text => report::render_text_day(day, shop.items()),
            OutputFormat::Json => report::render_json_day(day, shop.items())
                .with_context(|| format!("failed to encode day {day}"))?,
        };
        out.write_all(rendered.as_bytes())
            .context("failed to write report")?;
        shop.update_quality();
    }

    out.flush().context("failed to flush report")?;
    tracing::info!(days = config.days, "simulation finished");
    Ok(())
}
