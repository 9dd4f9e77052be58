//! Grouped bar chart of cleaning services market size, 2024 vs 2033.

use crate::charts::canvas::{self, Area, Canvas, Label, PixelRect};
use crate::charts::palette::{GRID, TEXT, VIRIDIS_PAIR};
use crate::charts::scale::{map_y, nice_step, ticks};
use crate::config::{ChartSize, RenderConfig};
use crate::data::{market_bars, MarketRecord, MARKET_TABLE, YEAR_LABELS};
use crate::error::Result;
use image::RgbImage;
use plotters::style::text_anchor::{HPos, VPos};
use plotters::style::RGBColor;
use std::path::PathBuf;

pub const TITLE: &str = "Cleaning Services Market Growth in MENA (2024 vs 2033)";
pub const X_LABEL: &str = "Country";
pub const Y_LABEL: &str = "Market Size (Billion USD)";

// Share of a category slot covered by its group of bars
const GROUP_WIDTH: f64 = 0.8;
const LABEL_PADDING: i32 = 3;

// Plot margins, in pixels from each canvas edge
const PLOT_LEFT: i32 = 90;
const PLOT_TOP: i32 = 70;
const PLOT_RIGHT_PAD: i32 = 30;
const PLOT_BOTTOM_PAD: i32 = 70;
const MIN_PLOT_HEIGHT: i32 = 160;

const LEGEND_INSET: i32 = 10;
const LEGEND_WIDTH: i32 = 280;
const LEGEND_ROW: i32 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub country: &'static str,
    pub year_index: usize,
    pub value: f64,
    pub rect: PixelRect,
    pub color: RGBColor,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: PixelRect,
    pub color: RGBColor,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketLayout {
    pub size: ChartSize,
    pub plot: PixelRect,
    pub y_max: f64,
    pub y_ticks: Vec<(f64, i32)>,
    pub bars: Vec<BarMark>,
    pub categories: Vec<Label>,
    pub legend_frame: PixelRect,
    pub legend: Vec<LegendEntry>,
}

pub struct MarketChartGenerator;

impl MarketChartGenerator {
    pub const FILE_NAME: &'static str = "market_growth_mena.png";

    /// Smallest canvas whose plot area still holds the legend box.
    pub const MIN_SIZE: ChartSize = ChartSize::new(
        (PLOT_LEFT + 2 * LEGEND_INSET + LEGEND_WIDTH + PLOT_RIGHT_PAD) as u32,
        (PLOT_TOP + MIN_PLOT_HEIGHT + PLOT_BOTTOM_PAD) as u32,
    );

    /// Place every bar, tick and label for `records`.
    pub fn layout(records: &[MarketRecord], size: ChartSize) -> MarketLayout {
        let (w, h) = (size.width as i32, size.height as i32);
        let plot = PixelRect::new(PLOT_LEFT, PLOT_TOP, w - PLOT_RIGHT_PAD, h - PLOT_BOTTOM_PAD);

        let bars = market_bars(records);
        let max_value = bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let headroom = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
        let step = nice_step(headroom, 8);
        let y_max = (headroom / step).ceil() * step;
        let y_ticks = ticks(0.0, y_max, step)
            .into_iter()
            .map(|v| (v, map_y(v, 0.0, y_max, plot.top, plot.bottom)))
            .collect();

        let n_categories = records.len().max(1);
        let slot_w = plot.width() as f64 / n_categories as f64;
        let n_hues = YEAR_LABELS.len();
        let bar_w = slot_w * GROUP_WIDTH / n_hues as f64;

        let bar_marks = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let category = i / n_hues;
                let slot_center = plot.left as f64 + slot_w * (category as f64 + 0.5);
                let bar_left = slot_center - slot_w * GROUP_WIDTH / 2.0 + bar_w * bar.year_index as f64;
                let top = map_y(bar.value, 0.0, y_max, plot.top, plot.bottom);
                let rect = PixelRect::new(
                    bar_left.round() as i32,
                    top,
                    (bar_left + bar_w).round() as i32 - 1,
                    plot.bottom,
                );
                let label_pos = ((rect.left + rect.right) / 2, top - LABEL_PADDING);
                BarMark {
                    country: bar.country,
                    year_index: bar.year_index,
                    value: bar.value,
                    rect,
                    color: VIRIDIS_PAIR[bar.year_index % VIRIDIS_PAIR.len()],
                    label: Label::new(bar.value_label(), label_pos),
                }
            })
            .collect();

        let categories = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let x = plot.left as f64 + slot_w * (i as f64 + 0.5);
                Label::new(record.country, (x.round() as i32, plot.bottom + 8))
            })
            .collect();

        let legend_frame = PixelRect::new(
            plot.left + LEGEND_INSET,
            plot.top + LEGEND_INSET,
            plot.left + LEGEND_INSET + LEGEND_WIDTH,
            plot.top + LEGEND_INSET + 4 + LEGEND_ROW * n_hues as i32,
        );
        let legend = YEAR_LABELS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let y = legend_frame.top + 8 + LEGEND_ROW * i as i32;
                let swatch = PixelRect::new(legend_frame.left + 8, y, legend_frame.left + 30, y + 12);
                LegendEntry {
                    swatch,
                    color: VIRIDIS_PAIR[i],
                    label: Label::new(*name, (swatch.right + 8, y + 6)),
                }
            })
            .collect();

        MarketLayout {
            size,
            plot,
            y_max,
            y_ticks,
            bars: bar_marks,
            categories,
            legend_frame,
            legend,
        }
    }

    pub fn render(size: ChartSize) -> Result<RgbImage> {
        size.ensure_at_least(Self::MIN_SIZE, "market")?;
        let layout = Self::layout(&MARKET_TABLE, size);
        tracing::debug!(
            bars = layout.bars.len(),
            y_max = layout.y_max,
            "market chart layout"
        );
        Canvas::new(size).render(|area| Self::draw(area, &layout))
    }

    pub fn generate(config: &RenderConfig) -> Result<PathBuf> {
        let image = Self::render(config.market)?;
        let path = config.output_path(Self::FILE_NAME);
        canvas::write_png(&image, &path)?;
        Ok(path)
    }

    fn draw(area: &Area<'_>, layout: &MarketLayout) -> Result<()> {
        let plot = layout.plot;
        let w = layout.size.width as i32;

        canvas::text(
            area,
            &Label::new(TITLE, (w / 2, 30)),
            22,
            TEXT,
            (HPos::Center, VPos::Center),
        )?;

        // Grid and y ticks
        for (value, y) in &layout.y_ticks {
            canvas::line(area, (plot.left, *y), (plot.right, *y), GRID)?;
            canvas::text(
                area,
                &Label::new(format!("{:.0}", value), (plot.left - 8, *y)),
                13,
                TEXT,
                (HPos::Right, VPos::Center),
            )?;
        }

        for bar in &layout.bars {
            canvas::fill_rect(area, bar.rect, bar.color)?;
            canvas::text(area, &bar.label, 13, TEXT, (HPos::Center, VPos::Bottom))?;
        }

        for category in &layout.categories {
            canvas::text(area, category, 14, TEXT, (HPos::Center, VPos::Top))?;
        }

        canvas::text(
            area,
            &Label::new(X_LABEL, ((plot.left + plot.right) / 2, plot.bottom + 42)),
            15,
            TEXT,
            (HPos::Center, VPos::Top),
        )?;
        canvas::vertical_text(
            area,
            &Label::new(Y_LABEL, (plot.left - 60, (plot.top + plot.bottom) / 2)),
            15,
            TEXT,
        )?;

        canvas::fill_rect(area, layout.legend_frame, RGBColor(255, 255, 255))?;
        canvas::stroke_rect(area, layout.legend_frame, GRID)?;
        for entry in &layout.legend {
            canvas::fill_rect(area, entry.swatch, entry.color)?;
            canvas::text(area, &entry.label, 13, TEXT, (HPos::Left, VPos::Center))?;
        }

        Ok(())
    }
}
