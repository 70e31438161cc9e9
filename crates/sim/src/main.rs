use gildedrose_sim::SimConfig;

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env()?.with_days_arg(std::env::args().nth(1).as_deref())?;

    gildedrose_observability::init_with(config.log_format);

    let stdout = std::io::stdout();
    gildedrose_sim::run(&config, &mut stdout.lock())
}
