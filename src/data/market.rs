//! Market size projections for the cleaning services sector.

/// Market size of one country, in billions of USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketRecord {
    pub country: &'static str,
    pub value_2024: f64,
    pub value_2033: f64,
}

/// Series names used as the hue dimension and in the legend.
pub const YEAR_LABELS: [&str; 2] = [
    "Market Size 2024 (Billion USD)",
    "Projected 2033 (Billion USD)",
];

pub const MARKET_TABLE: [MarketRecord; 3] = [
    MarketRecord {
        country: "Saudi Arabia",
        value_2024: 5.4,
        value_2033: 9.49,
    },
    MarketRecord {
        country: "Egypt",
        value_2024: 3.67,
        value_2033: 6.73,
    },
    MarketRecord {
        country: "UAE",
        value_2024: 2.0,
        value_2033: 3.13,
    },
];

/// One (country, year, value) triple of the long-form table.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBar {
    pub country: &'static str,
    pub year_label: &'static str,
    /// Index into [`YEAR_LABELS`]
    pub year_index: usize,
    pub value: f64,
}

impl MarketBar {
    /// Bar annotation, e.g. "5.4B".
    pub fn value_label(&self) -> String {
        format!("{:.1}B", self.value)
    }
}

/// Reshape the wide per-country table into long form, country-major.
pub fn market_bars(records: &[MarketRecord]) -> Vec<MarketBar> {
    records
        .iter()
        .flat_map(|record| {
            [record.value_2024, record.value_2033]
                .into_iter()
                .enumerate()
                .map(move |(year_index, value)| MarketBar {
                    country: record.country,
                    year_label: YEAR_LABELS[year_index],
                    year_index,
                    value,
                })
        })
        .collect()
}
