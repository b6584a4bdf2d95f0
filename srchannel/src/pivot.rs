//! Symmetric-window pivot scan.
//!
//! A candle at index `i` is a pivot high when its value is strictly greater
//! than the value of each of the `period` candles on either side. Pivot lows
//! mirror this with strictly-less. Ties on either side disqualify the
//! candidate, and the first and last `period` candles are never pivots.

use crate::bar::Candle;
use crate::constant::PivotSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotPoint {
    pub value: f64,
    pub index: usize,
    pub timestamp: i64,
}

impl PivotSource {
    pub fn high_of(self, candle: &Candle) -> f64 {
        match self {
            Self::HighLow => candle.high,
            Self::CloseOpen => candle.body_high(),
        }
    }

    pub fn low_of(self, candle: &Candle) -> f64 {
        match self {
            Self::HighLow => candle.low,
            Self::CloseOpen => candle.body_low(),
        }
    }
}

/// Pivot highs in ascending index order.
pub fn find_pivot_highs(candles: &[Candle], period: usize, source: PivotSource) -> Vec<PivotPoint> {
    scan(candles, period, |c| source.high_of(c), |center, other| center > other)
}

/// Pivot lows in ascending index order.
pub fn find_pivot_lows(candles: &[Candle], period: usize, source: PivotSource) -> Vec<PivotPoint> {
    scan(candles, period, |c| source.low_of(c), |center, other| center < other)
}

fn scan<V, B>(candles: &[Candle], period: usize, value_of: V, beats: B) -> Vec<PivotPoint>
where
    V: Fn(&Candle) -> f64,
    B: Fn(f64, f64) -> bool,
{
    let len = candles.len();
    if len < period.saturating_mul(2).saturating_add(1) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for i in period..(len - period) {
        let current = value_of(&candles[i]);
        let left = &candles[i - period..i];
        let right = &candles[i + 1..=i + period];
        let is_pivot = left
            .iter()
            .chain(right.iter())
            .all(|c| beats(current, value_of(c)));
        if is_pivot {
            out.push(PivotPoint {
                value: current,
                index: i,
                timestamp: candles[i].timestamp,
            });
        }
    }
    out
}

/// Highs and lows merged, newest pivot first.
///
/// The sort is stable, so a high and a low on the same candle keep
/// high-before-low order.
pub fn merge_by_recency(highs: Vec<PivotPoint>, lows: Vec<PivotPoint>) -> Vec<PivotPoint> {
    let mut all = highs;
    all.extend(lows);
    all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    all
}
