//! Informal vs formal employment split (Egypt).

use crate::error::{ChartError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkforceSplit {
    pub informal_percent: f64,
    pub formal_percent: f64,
}

pub const WORKFORCE_SPLIT: WorkforceSplit = WorkforceSplit {
    informal_percent: 64.0,
    formal_percent: 36.0,
};

impl WorkforceSplit {
    pub const LABELS: [&'static str; 2] = ["Informal Employment", "Formal Employment"];

    /// Slice sizes in label order.
    pub fn sizes(&self) -> [f64; 2] {
        [self.informal_percent, self.formal_percent]
    }

    /// The two shares must be non-negative and sum to 100.
    pub fn validate(&self) -> Result<()> {
        let sizes = self.sizes();
        if sizes.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "workforce shares must be non-negative, got {:?}",
                sizes
            )));
        }
        let total: f64 = sizes.iter().sum();
        if (total - 100.0).abs() > 1e-9 {
            return Err(ChartError::InvalidData(format!(
                "workforce shares sum to {}, expected 100",
                total
            )));
        }
        Ok(())
    }
}
