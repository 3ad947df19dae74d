use std::sync::{Arc, Mutex};

use anyhow::Context;
use mailboard_app::command::HELP;
use mailboard_app::mentions::demo_dataset;
use mailboard_app::terminal::Output;
use mailboard_app::{AppConfig, Page};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    mailboard_observability::init_with(&config.log);

    let series = if config.chart_series {
        demo_dataset(&mut rand::rng(), chrono::Utc::now())
    } else {
        Vec::new()
    };

    let out: Output = Arc::new(Mutex::new(std::io::stdout()));
    tracing::info!(records = config.seed.len(), "starting mailboard");
    let page = Page::new(config.seed, series, out);
    page.start();
    page.print(HELP);

    page.run(std::io::stdin().lock()).context("failed to read stdin")?;

    tracing::info!("bye");
    Ok(())
}
