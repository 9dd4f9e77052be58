//! Data module - Fixed datasets behind each chart

mod market;
mod pain_points;
mod workforce;

pub use market::{market_bars, MarketBar, MarketRecord, MARKET_TABLE, YEAR_LABELS};
pub use pain_points::{PainPointMatrix, PAIN_POINTS};
pub use workforce::{WorkforceSplit, WORKFORCE_SPLIT};
