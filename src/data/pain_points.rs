//! Synthetic severity scores of customer pain points per segment.

use crate::error::{ChartError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PainPointMatrix {
    pub rows: [&'static str; 3],
    pub columns: [&'static str; 4],
    pub scores: [[f64; 4]; 3],
}

pub const PAIN_POINTS: PainPointMatrix = PainPointMatrix {
    rows: ["Households", "Offices", "Busy Professionals"],
    columns: [
        "Trust/Safety",
        "Price Transparency",
        "Availability",
        "Quality Consistency",
    ],
    scores: [
        [9.0, 7.0, 8.0, 9.0], // trust dominates at home
        [6.0, 9.0, 8.0, 7.0], // offices negotiate on price
        [8.0, 6.0, 9.0, 8.0], // professionals need availability
    ],
};

impl PainPointMatrix {
    pub const MIN_SCORE: f64 = 0.0;
    pub const MAX_SCORE: f64 = 10.0;

    /// Every score must lie in the colour scale bounds.
    pub fn validate(&self) -> Result<()> {
        for (r, row) in self.scores.iter().enumerate() {
            for (c, &score) in row.iter().enumerate() {
                if !(Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score) {
                    return Err(ChartError::InvalidData(format!(
                        "score {} for {} / {} is outside [{}, {}]",
                        score,
                        self.rows[r],
                        self.columns[c],
                        Self::MIN_SCORE,
                        Self::MAX_SCORE
                    )));
                }
            }
        }
        Ok(())
    }

    /// Cell annotation with two significant digits, shortest form
    /// (`9`, `7.5`, `0.12`, `1.2e-05`).
    pub fn format_score(score: f64) -> String {
        // Rounding to two digits first fixes the exponent (9.96 -> 1.0e1)
        let rounded = format!("{:.1e}", score);
        let Some((mantissa, exp)) = rounded.split_once('e') else {
            return score.to_string();
        };
        let Ok(exp) = exp.parse::<i32>() else {
            return score.to_string();
        };

        if !(-4..2).contains(&exp) {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
        } else {
            let decimals = (1 - exp).max(0) as usize;
            trim_zeros(&format!("{:.*}", decimals, score)).to_string()
        }
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
