use chrono::NaiveDate;
use serde::Serialize;

/// Dashboard metrics, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    pub total: f64,
    pub average: f64,
    pub max: f64,
    /// Amount of the most recently added record (insertion order, not date order).
    pub last: f64,
}

/// One bar of the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: f64,
}
