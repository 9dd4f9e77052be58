//! Colours and colour maps.

use plotters::style::RGBColor;

pub const TEXT: RGBColor = RGBColor(38, 38, 38);
pub const GRID: RGBColor = RGBColor(204, 204, 204);
pub const LIGHT_TEXT: RGBColor = RGBColor(255, 255, 255);

/// viridis sampled at 1/3 and 2/3, the two-colour split of the palette
pub const VIRIDIS_PAIR: [RGBColor; 2] = [RGBColor(0x31, 0x68, 0x8E), RGBColor(0x35, 0xB7, 0x79)];

pub const INFORMAL: RGBColor = RGBColor(0xFF, 0x99, 0x99);
pub const FORMAL: RGBColor = RGBColor(0x66, 0xB3, 0xFF);

// ColorBrewer "Reds", light to dark
const REDS: [(u8, u8, u8); 9] = [
    (0xFF, 0xF5, 0xF0),
    (0xFE, 0xE0, 0xD2),
    (0xFC, 0xBB, 0xA1),
    (0xFC, 0x92, 0x72),
    (0xFB, 0x6A, 0x4A),
    (0xEF, 0x3B, 0x2C),
    (0xCB, 0x18, 0x1D),
    (0xA5, 0x0F, 0x15),
    (0x67, 0x00, 0x0D),
];

/// Sequential red map; `t` is clamped to [0, 1].
pub fn reds(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (REDS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(REDS.len() - 2);
    let frac = scaled - lower as f64;
    let (a, b) = (REDS[lower], REDS[lower + 1]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// WCAG relative luminance in [0, 1].
pub fn relative_luminance(color: RGBColor) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(color.0) + 0.7152 * linear(color.1) + 0.0722 * linear(color.2)
}

/// Text colour readable on `background`.
pub fn annotation_color(background: RGBColor) -> RGBColor {
    if relative_luminance(background) > 0.408 {
        TEXT
    } else {
        LIGHT_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reds_endpoints() {
        assert_eq!(reds(0.0), RGBColor(0xFF, 0xF5, 0xF0));
        assert_eq!(reds(1.0), RGBColor(0x67, 0x00, 0x0D));
        assert_eq!(reds(0.5), RGBColor(0xFB, 0x6A, 0x4A));
    }

    #[test]
    fn reds_clamps_out_of_range() {
        assert_eq!(reds(-3.0), reds(0.0));
        assert_eq!(reds(12.0), reds(1.0));
        assert_eq!(reds(f64::NAN), reds(0.0));
    }

    #[test]
    fn reds_darkens_monotonically() {
        let mut previous = relative_luminance(reds(0.0));
        for i in 1..=20 {
            let current = relative_luminance(reds(i as f64 / 20.0));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn annotation_contrasts_with_cell() {
        assert_eq!(annotation_color(reds(0.1)), TEXT);
        assert_eq!(annotation_color(reds(0.9)), LIGHT_TEXT);
        assert_eq!(annotation_color(RGBColor(255, 255, 255)), TEXT);
    }
}
