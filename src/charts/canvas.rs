//! Scoped drawing canvas
//!
//! A [`Canvas`] owns an RGB pixel buffer for exactly one chart. Rendering
//! consumes it and hands the finished buffer back as an [`RgbImage`], so no
//! drawing state can leak from one chart into the next.

use crate::config::ChartSize;
use crate::error::{ChartError, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::path::Path;

pub type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub const FONT_FAMILY: &str = "sans-serif";

/// Axis-aligned pixel rectangle, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    fn corners(&self) -> [(i32, i32); 2] {
        [(self.left, self.top), (self.right, self.bottom)]
    }
}

/// Text placed at an anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: (i32, i32),
}

impl Label {
    pub fn new(text: impl Into<String>, pos: (i32, i32)) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Canvas {
    pub fn new(size: ChartSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            buffer: vec![255; size.width as usize * size.height as usize * 3],
        }
    }

    /// Run `draw` on a white drawing area and return the finished image.
    pub fn render<F>(mut self, draw: F) -> Result<RgbImage>
    where
        F: FnOnce(&Area<'_>) -> Result<()>,
    {
        let (width, height) = (self.width, self.height);
        {
            let root = BitMapBackend::with_buffer(&mut self.buffer, (width, height))
                .into_drawing_area();
            root.fill(&WHITE)?;
            draw(&root)?;
            root.present()?;
        }
        RgbImage::from_raw(width, height, self.buffer).ok_or(ChartError::Buffer { width, height })
    }
}

/// Encode `image` as PNG at `path`.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ChartError::Write {
            path: path.to_path_buf(),
            source,
        })
}

pub fn fill_rect(area: &Area<'_>, rect: PixelRect, color: RGBColor) -> Result<()> {
    area.draw(&Rectangle::new(rect.corners(), color.filled()))?;
    Ok(())
}

pub fn stroke_rect(area: &Area<'_>, rect: PixelRect, color: RGBColor) -> Result<()> {
    area.draw(&Rectangle::new(rect.corners(), color.stroke_width(1)))?;
    Ok(())
}

pub fn line(area: &Area<'_>, from: (i32, i32), to: (i32, i32), color: RGBColor) -> Result<()> {
    area.draw(&PathElement::new(vec![from, to], color.stroke_width(1)))?;
    Ok(())
}

pub fn text(
    area: &Area<'_>,
    label: &Label,
    size: u32,
    color: RGBColor,
    anchor: (HPos, VPos),
) -> Result<()> {
    let style = TextStyle::from((FONT_FAMILY, size as f64).into_font())
        .color(&color)
        .pos(Pos::new(anchor.0, anchor.1));
    area.draw_text(&label.text, &style, label.pos)?;
    Ok(())
}

/// Text rotated a quarter turn counter-clockwise, centred on its anchor.
pub fn vertical_text(area: &Area<'_>, label: &Label, size: u32, color: RGBColor) -> Result<()> {
    let style = TextStyle::from(
        (FONT_FAMILY, size as f64)
            .into_font()
            .transform(FontTransform::Rotate270),
    )
    .color(&color)
    .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw_text(&label.text, &style, label.pos)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_geometry() {
        let rect = PixelRect::new(10, 20, 110, 70);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
        assert_eq!(rect.center(), (60, 45));
        assert!(rect.contains((10, 70)));
        assert!(!rect.contains((9, 45)));
    }

    #[test]
    fn blank_canvas_renders_white() {
        let image = Canvas::new(ChartSize::new(40, 30)).render(|_| Ok(())).unwrap();
        assert_eq!(image.dimensions(), (40, 30));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn filled_rect_lands_in_buffer() {
        let image = Canvas::new(ChartSize::new(40, 30))
            .render(|area| fill_rect(area, PixelRect::new(5, 5, 15, 15), RGBColor(10, 20, 30)))
            .unwrap();
        assert_eq!(image.get_pixel(10, 10).0, [10, 20, 30]);
        assert_eq!(image.get_pixel(20, 20).0, [255, 255, 255]);
    }

    #[test]
    fn draw_errors_propagate() {
        let result = Canvas::new(ChartSize::new(40, 30))
            .render(|_| Err(ChartError::InvalidData("boom".to_string())));
        assert!(matches!(result, Err(ChartError::InvalidData(_))));
    }

    #[test]
    fn writing_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbImage::new(4, 4);
        let err = write_png(&image, &dir.path().join("missing/chart.png")).unwrap_err();
        assert!(matches!(err, ChartError::Write { .. }));
    }
}
