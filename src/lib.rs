//! Market Charts - Static charts for the MENA cleaning services study
//!
//! Renders three PNG charts from fixed datasets:
//! - market size per country, 2024 vs 2033 (grouped bars)
//! - Egypt's informal vs formal workforce (donut)
//! - customer pain-point severity per segment (heatmap)

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;

use charts::{MarketChartGenerator, PainPointHeatmapGenerator, WorkforceChartGenerator};
use config::RenderConfig;
use error::Result;
use std::path::PathBuf;

pub use error::ChartError;

/// Render all charts in order: market, workforce, pain points.
///
/// Stops at the first failure; charts already written are left in place.
pub fn run(config: &RenderConfig) -> Result<Vec<PathBuf>> {
    if config.create_output_dir {
        std::fs::create_dir_all(&config.output_dir).map_err(|source| ChartError::CreateDir {
            path: config.output_dir.clone(),
            source,
        })?;
    }

    let generators: [fn(&RenderConfig) -> Result<PathBuf>; 3] = [
        MarketChartGenerator::generate,
        WorkforceChartGenerator::generate,
        PainPointHeatmapGenerator::generate,
    ];

    let mut written = Vec::with_capacity(generators.len());
    for generate in generators {
        let path = generate(config)?;
        tracing::info!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}
