//! Heatmap of customer pain-point severity per segment.

use crate::charts::canvas::{self, Area, Canvas, Label, PixelRect};
use crate::charts::palette::{annotation_color, reds, TEXT};
use crate::charts::scale::{map_y, ticks};
use crate::config::{ChartSize, RenderConfig};
use crate::data::{PainPointMatrix, PAIN_POINTS};
use crate::error::Result;
use image::RgbImage;
use plotters::style::text_anchor::{HPos, VPos};
use plotters::style::RGBColor;
use std::path::PathBuf;

pub const TITLE: &str = "Customer Pain Points Severity Analysis";

const COLORBAR_TICK_STEP: f64 = 2.0;

// Grid margins, in pixels from each canvas edge
const GRID_LEFT: i32 = 170;
const GRID_TOP: i32 = 70;
const GRID_RIGHT_PAD: i32 = 140;
const GRID_BOTTOM_PAD: i32 = 60;
const MIN_CELL_WIDTH: i32 = 60;
const MIN_CELL_HEIGHT: i32 = 40;

// Colour bar strip, measured back from the right edge
const COLORBAR_RIGHT_PAD: i32 = 90;
const COLORBAR_WIDTH: i32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct CellMark {
    pub row: usize,
    pub col: usize,
    pub value: f64,
    pub rect: PixelRect,
    pub color: RGBColor,
    pub label: Label,
    pub text_color: RGBColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar {
    pub rect: PixelRect,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<(f64, i32)>,
}

impl ColorBar {
    /// Colour of the one-pixel strip at row `y`.
    pub fn color_at(&self, y: i32) -> RGBColor {
        let t = (self.rect.bottom - y) as f64 / self.rect.height().max(1) as f64;
        reds(t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLayout {
    pub size: ChartSize,
    pub grid: PixelRect,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<CellMark>,
    pub row_labels: Vec<Label>,
    pub col_labels: Vec<Label>,
    pub colorbar: ColorBar,
}

impl HeatmapLayout {
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellMark> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }
}

/// Normalise a score onto the fixed colour scale.
pub fn scale_position(value: f64) -> f64 {
    (value - PainPointMatrix::MIN_SCORE) / (PainPointMatrix::MAX_SCORE - PainPointMatrix::MIN_SCORE)
}

pub struct PainPointHeatmapGenerator;

impl PainPointHeatmapGenerator {
    pub const FILE_NAME: &'static str = "pain_points_heatmap.png";

    /// Smallest canvas giving every cell of the matrix a readable size.
    pub const MIN_SIZE: ChartSize = ChartSize::new(
        (GRID_LEFT + MIN_CELL_WIDTH * PAIN_POINTS.columns.len() as i32 + GRID_RIGHT_PAD) as u32,
        (GRID_TOP + MIN_CELL_HEIGHT * PAIN_POINTS.rows.len() as i32 + GRID_BOTTOM_PAD) as u32,
    );

    pub fn layout(matrix: &PainPointMatrix, size: ChartSize) -> Result<HeatmapLayout> {
        matrix.validate()?;

        let (w, h) = (size.width as i32, size.height as i32);
        let grid = PixelRect::new(GRID_LEFT, GRID_TOP, w - GRID_RIGHT_PAD, h - GRID_BOTTOM_PAD);
        let rows = matrix.rows.len();
        let cols = matrix.columns.len();
        let cell_w = grid.width() as f64 / cols as f64;
        let cell_h = grid.height() as f64 / rows as f64;

        let edge_x = |c: usize| grid.left + (cell_w * c as f64).round() as i32;
        let edge_y = |r: usize| grid.top + (cell_h * r as f64).round() as i32;

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in matrix.scores.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                // Neighbouring cells share no pixels
                let rect = PixelRect::new(edge_x(c), edge_y(r), edge_x(c + 1) - 1, edge_y(r + 1) - 1);
                let color = reds(scale_position(value));
                cells.push(CellMark {
                    row: r,
                    col: c,
                    value,
                    rect,
                    color,
                    label: Label::new(PainPointMatrix::format_score(value), rect.center()),
                    text_color: annotation_color(color),
                });
            }
        }

        let row_labels = matrix
            .rows
            .iter()
            .enumerate()
            .map(|(r, name)| {
                let y = (edge_y(r) + edge_y(r + 1)) / 2;
                Label::new(*name, (grid.left - 10, y))
            })
            .collect();
        let col_labels = matrix
            .columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                let x = (edge_x(c) + edge_x(c + 1)) / 2;
                Label::new(*name, (x, grid.bottom + 10))
            })
            .collect();

        let bar_rect = PixelRect::new(
            w - COLORBAR_RIGHT_PAD - COLORBAR_WIDTH,
            grid.top,
            w - COLORBAR_RIGHT_PAD,
            grid.bottom,
        );
        let bar_ticks = ticks(
            PainPointMatrix::MIN_SCORE,
            PainPointMatrix::MAX_SCORE,
            COLORBAR_TICK_STEP,
        )
        .into_iter()
        .map(|v| {
            let y = map_y(
                v,
                PainPointMatrix::MIN_SCORE,
                PainPointMatrix::MAX_SCORE,
                bar_rect.top,
                bar_rect.bottom,
            );
            (v, y)
        })
        .collect();

        Ok(HeatmapLayout {
            size,
            grid,
            rows,
            cols,
            cells,
            row_labels,
            col_labels,
            colorbar: ColorBar {
                rect: bar_rect,
                min: PainPointMatrix::MIN_SCORE,
                max: PainPointMatrix::MAX_SCORE,
                ticks: bar_ticks,
            },
        })
    }

    pub fn render(size: ChartSize) -> Result<RgbImage> {
        size.ensure_at_least(Self::MIN_SIZE, "heatmap")?;
        let layout = Self::layout(&PAIN_POINTS, size)?;
        tracing::debug!(
            rows = layout.rows,
            cols = layout.cols,
            "pain point heatmap layout"
        );
        Canvas::new(size).render(|area| Self::draw(area, &layout))
    }

    pub fn generate(config: &RenderConfig) -> Result<PathBuf> {
        let image = Self::render(config.heatmap)?;
        let path = config.output_path(Self::FILE_NAME);
        canvas::write_png(&image, &path)?;
        Ok(path)
    }

    fn draw(area: &Area<'_>, layout: &HeatmapLayout) -> Result<()> {
        canvas::text(
            area,
            &Label::new(TITLE, (layout.size.width as i32 / 2, 30)),
            22,
            TEXT,
            (HPos::Center, VPos::Center),
        )?;

        for cell in &layout.cells {
            canvas::fill_rect(area, cell.rect, cell.color)?;
            canvas::text(area, &cell.label, 18, cell.text_color, (HPos::Center, VPos::Center))?;
        }

        for label in &layout.row_labels {
            canvas::text(area, label, 14, TEXT, (HPos::Right, VPos::Center))?;
        }
        for label in &layout.col_labels {
            canvas::text(area, label, 14, TEXT, (HPos::Center, VPos::Top))?;
        }

        let bar = &layout.colorbar;
        for y in bar.rect.top..=bar.rect.bottom {
            canvas::line(area, (bar.rect.left, y), (bar.rect.right, y), bar.color_at(y))?;
        }
        for (value, y) in &bar.ticks {
            canvas::line(area, (bar.rect.right, *y), (bar.rect.right + 4, *y), TEXT)?;
            canvas::text(
                area,
                &Label::new(format!("{:.0}", value), (bar.rect.right + 8, *y)),
                13,
                TEXT,
                (HPos::Left, VPos::Center),
            )?;
        }

        Ok(())
    }
}
