//! Charts module - Chart layout and rendering

pub mod canvas;
mod heatmap;
mod market;
pub mod palette;
mod scale;
mod workforce;

pub use canvas::{Canvas, Label, PixelRect};
pub use heatmap::{CellMark, ColorBar, HeatmapLayout, PainPointHeatmapGenerator};
pub use market::{BarMark, LegendEntry, MarketChartGenerator, MarketLayout};
pub use workforce::{DonutLayout, SliceMark, WorkforceChartGenerator};
