//! Dashboard statistics and trend window.
//!
//! Everything here is a pure function of the newest-first record list.

use crate::models::record::RainfallRecord;
use crate::models::summary::{Stats, TrendPoint};

/// Number of records shown in the trend chart.
pub const TREND_WINDOW: usize = 10;

const BAR_CHAR: char = '█';

/// Round to one decimal using the exact binary value, so `0.15`
/// (stored as 0.1499…) gives `0.1`. Exact ties such as `0.25` round away
/// from zero.
pub fn round1(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

impl Stats {
    /// `last` is the first element of the list (most recently added),
    /// whatever its `date` says.
    pub fn compute(records: &[RainfallRecord]) -> Self {
        let Some(newest) = records.first() else {
            return Stats::default();
        };

        let total: f64 = records.iter().map(|r| r.amount).sum();
        let max = records
            .iter()
            .map(|r| r.amount)
            .fold(f64::NEG_INFINITY, f64::max);

        Stats {
            total: round1(total),
            average: round1(total / records.len() as f64),
            max: round1(max),
            last: round1(newest.amount),
        }
    }
}

/// First `TREND_WINDOW` records of the newest-first list, oldest first.
pub fn trend_window(records: &[RainfallRecord]) -> Vec<&RainfallRecord> {
    records.iter().take(TREND_WINDOW).rev().collect()
}

pub fn trend_points(records: &[RainfallRecord]) -> Vec<TrendPoint> {
    trend_window(records)
        .into_iter()
        .map(|r| TrendPoint {
            date: r.date,
            amount: r.amount,
        })
        .collect()
}

/// Plain-text horizontal bar chart, one line per point.
/// The largest amount spans `width` cells.
pub fn render_bar_chart(points: &[TrendPoint], width: usize) -> String {
    let peak = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for p in points {
        let cells = if peak > 0.0 {
            ((p.amount / peak) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{} │{:<width$} {:.1} mm\n",
            p.date.format("%d %b"),
            BAR_CHAR.to_string().repeat(cells),
            p.amount,
            width = width
        ));
    }
    out
}
