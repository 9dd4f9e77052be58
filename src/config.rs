//! Render configuration
//!
//! Everything has a default matching the published charts; a `charts.json`
//! file in the working directory may override any field, including just the
//! width or height of one chart.

use crate::charts::{MarketChartGenerator, PainPointHeatmapGenerator, WorkforceChartGenerator};
use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "charts.json";

/// Pixel size of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject sizes smaller than `min` in either direction.
    pub fn ensure_at_least(self, min: ChartSize, chart: &str) -> Result<()> {
        if self.width < min.width || self.height < min.height {
            return Err(ChartError::InvalidData(format!(
                "{} chart size {}x{} is below {}x{}",
                chart, self.width, self.height, min.width, min.height
            )));
        }
        Ok(())
    }
}

/// A size object where either field may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialSize {
    width: Option<u32>,
    height: Option<u32>,
}

impl PartialSize {
    fn or(self, fallback: ChartSize) -> ChartSize {
        ChartSize::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

/// On-disk shape of `charts.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    output_dir: Option<PathBuf>,
    create_output_dir: Option<bool>,
    market: PartialSize,
    workforce: PartialSize,
    heatmap: PartialSize,
}

impl From<ConfigFile> for RenderConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = RenderConfig::default();
        Self {
            output_dir: file.output_dir.unwrap_or(defaults.output_dir),
            create_output_dir: file.create_output_dir.unwrap_or(defaults.create_output_dir),
            market: file.market.or(defaults.market),
            workforce: file.workforce.or(defaults.workforce),
            heatmap: file.heatmap.or(defaults.heatmap),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct RenderConfig {
    /// Directory receiving the images
    pub output_dir: PathBuf,
    /// Create `output_dir` when missing instead of failing on write
    pub create_output_dir: bool,
    pub market: ChartSize,
    pub workforce: ChartSize,
    pub heatmap: ChartSize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            create_output_dir: false,
            market: ChartSize::new(1000, 600),
            workforce: ChartSize::new(800, 800),
            heatmap: ChartSize::new(1000, 600),
        }
    }
}

impl RenderConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| ChartError::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, path)
    }

    /// Every chart must be at least as large as its layout needs.
    pub fn validate(&self) -> Result<()> {
        self.market
            .ensure_at_least(MarketChartGenerator::MIN_SIZE, "market")?;
        self.workforce
            .ensure_at_least(WorkforceChartGenerator::MIN_SIZE, "workforce")?;
        self.heatmap
            .ensure_at_least(PainPointHeatmapGenerator::MIN_SIZE, "heatmap")?;
        Ok(())
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
