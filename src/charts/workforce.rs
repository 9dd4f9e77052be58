//! Donut chart of Egypt's informal vs formal employment.

use crate::charts::canvas::{self, Area, Canvas, Label};
use crate::charts::palette::{FORMAL, INFORMAL, TEXT};
use crate::config::{ChartSize, RenderConfig};
use crate::data::{WorkforceSplit, WORKFORCE_SPLIT};
use crate::error::Result;
use image::RgbImage;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};
use std::path::PathBuf;

pub const TITLE: &str = "Egypt Workforce Composition: The Need for Formalization";

const START_ANGLE: f64 = 90.0;
const EXPLODE: [f64; 2] = [0.05, 0.0];
const HOLE_RADIUS: f64 = 0.70;
const PCT_DISTANCE: f64 = 0.85;
const LABEL_DISTANCE: f64 = 1.1;
const TITLE_HEIGHT: i32 = 60;
// Outer radius as a share of the shorter side of the body
const RADIUS_SHARE: f64 = 0.30;
const MIN_RADIUS: i32 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct SliceMark {
    pub name: &'static str,
    pub share: f64,
    pub color: RGBColor,
    /// Degrees counter-clockwise from 3 o'clock
    pub start_deg: f64,
    pub sweep_deg: f64,
    /// Wedge apex after exploding
    pub center: (f64, f64),
    pub percent_label: Label,
    pub name_label: Label,
}

impl SliceMark {
    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    /// Pixel at `distance` from the wedge apex along `angle_deg`.
    pub fn point_at(&self, angle_deg: f64, distance: f64) -> (i32, i32) {
        let (x, y) = polar(self.center, angle_deg, distance);
        (x.round() as i32, y.round() as i32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutLayout {
    pub size: ChartSize,
    pub center: (f64, f64),
    pub radius: f64,
    pub hole_radius: f64,
    pub slices: Vec<SliceMark>,
}

fn polar(origin: (f64, f64), angle_deg: f64, distance: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (origin.0 + distance * rad.cos(), origin.1 - distance * rad.sin())
}

fn to_pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

pub struct WorkforceChartGenerator;

impl WorkforceChartGenerator {
    pub const FILE_NAME: &'static str = "employment_stats.png";

    /// Smallest canvas keeping the ring and its outer labels legible.
    pub const MIN_SIZE: ChartSize = ChartSize::new(
        (MIN_RADIUS * 10 / 3) as u32,
        (TITLE_HEIGHT + MIN_RADIUS * 10 / 3) as u32,
    );

    pub fn layout(split: &WorkforceSplit, size: ChartSize) -> Result<DonutLayout> {
        split.validate()?;

        let (w, h) = (size.width as f64, size.height as f64);
        let body = h - TITLE_HEIGHT as f64;
        let center = (w / 2.0, TITLE_HEIGHT as f64 + body / 2.0);
        let radius = w.min(body) * RADIUS_SHARE;

        let sizes = split.sizes();
        let total: f64 = sizes.iter().sum();
        let colors = [INFORMAL, FORMAL];

        let mut start_deg = START_ANGLE;
        let mut slices = Vec::with_capacity(sizes.len());
        for (i, &value) in sizes.iter().enumerate() {
            let share = value / total;
            let sweep_deg = share * 360.0;
            let mid = start_deg + sweep_deg / 2.0;
            let apex = polar(center, mid, EXPLODE[i] * radius);

            slices.push(SliceMark {
                name: WorkforceSplit::LABELS[i],
                share,
                color: colors[i],
                start_deg,
                sweep_deg,
                center: apex,
                percent_label: Label::new(
                    format!("{:.1}%", share * 100.0),
                    to_pixel(polar(apex, mid, PCT_DISTANCE * radius)),
                ),
                name_label: Label::new(
                    WorkforceSplit::LABELS[i],
                    to_pixel(polar(apex, mid, LABEL_DISTANCE * radius)),
                ),
            });
            start_deg += sweep_deg;
        }

        Ok(DonutLayout {
            size,
            center,
            radius,
            hole_radius: HOLE_RADIUS * radius,
            slices,
        })
    }

    /// Outline of a pie wedge: apex, then the arc sampled about once per degree.
    pub fn wedge_points(slice: &SliceMark, radius: f64) -> Vec<(i32, i32)> {
        let steps = slice.sweep_deg.abs().ceil().max(2.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(to_pixel(slice.center));
        for i in 0..=steps {
            let angle = slice.start_deg + slice.sweep_deg * i as f64 / steps as f64;
            points.push(to_pixel(polar(slice.center, angle, radius)));
        }
        points
    }

    pub fn render(size: ChartSize) -> Result<RgbImage> {
        size.ensure_at_least(Self::MIN_SIZE, "workforce")?;
        let layout = Self::layout(&WORKFORCE_SPLIT, size)?;
        tracing::debug!(
            slices = layout.slices.len(),
            radius = layout.radius,
            "workforce chart layout"
        );
        Canvas::new(size).render(|area| Self::draw(area, &layout))
    }

    pub fn generate(config: &RenderConfig) -> Result<PathBuf> {
        let image = Self::render(config.workforce)?;
        let path = config.output_path(Self::FILE_NAME);
        canvas::write_png(&image, &path)?;
        Ok(path)
    }

    fn draw(area: &Area<'_>, layout: &DonutLayout) -> Result<()> {
        canvas::text(
            area,
            &Label::new(TITLE, (layout.size.width as i32 / 2, TITLE_HEIGHT / 2)),
            22,
            TEXT,
            (HPos::Center, VPos::Center),
        )?;

        for slice in &layout.slices {
            let points = Self::wedge_points(slice, layout.radius);
            area.draw(&Polygon::new(points, slice.color.filled()))?;
        }

        // Ring: blank out the middle
        area.draw(&Circle::new(
            to_pixel(layout.center),
            layout.hole_radius.round() as u32,
            WHITE.filled(),
        ))?;

        for slice in &layout.slices {
            canvas::text(area, &slice.percent_label, 16, TEXT, (HPos::Center, VPos::Center))?;
            let h_pos = if slice.mid_deg().to_radians().cos() < 0.0 {
                HPos::Right
            } else {
                HPos::Left
            };
            canvas::text(area, &slice.name_label, 16, TEXT, (h_pos, VPos::Center))?;
        }

        Ok(())
    }
}
