//! Market Charts - writes the study charts into `docs/`.

use anyhow::Context;
use market_charts::config::{RenderConfig, CONFIG_FILE};
use market_charts::logging;

fn main() {
    logging::init_logger();

    if let Err(e) = run() {
        tracing::error!("chart generation failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = RenderConfig::load_or_default(CONFIG_FILE)
        .with_context(|| format!("Failed to load {}", CONFIG_FILE))?;
    tracing::debug!(?config, "render config");

    let written = market_charts::run(&config).context("Failed to render charts")?;
    tracing::info!(
        "wrote {} charts to {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(())
}
