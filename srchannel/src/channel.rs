use crate::bar::{Candle, tail};
use crate::constant::{ChannelType, Const};
use crate::pivot::PivotPoint;

/// Working value between building and selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelCandidate {
    pub high: f64,
    pub low: f64,
    pub pivot_count: usize,
    pub strength: f64,
}

impl ChannelCandidate {
    pub fn overlaps(&self, low: f64, high: f64) -> bool {
        self.high >= low && self.low <= high
    }
}

/// Absorption budget: a percentage of the recent high-low range.
pub fn channel_width(candles: &[Candle], channel_width_percent: f64) -> f64 {
    let recent = tail(candles, Const::WIDTH_LOOKBACK_LIMIT);
    if recent.is_empty() {
        return 0.0;
    }
    let highest = recent.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = recent.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    (highest - lowest) * channel_width_percent / 100.0
}

/// Grows a channel from the pivot at `pivot_index`, absorbing every other
/// pivot whose inclusion keeps the width within `channel_width`.
///
/// Single pass in slice order; absorbed pivots are not re-checked against
/// later bounds. The returned candidate has `strength` 0.
pub fn build_channel_from_pivot(
    pivot_index: usize,
    pivots: &[PivotPoint],
    channel_width: f64,
) -> ChannelCandidate {
    let seed = pivots[pivot_index].value;
    let (high, low, pivot_count) = pivots
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != pivot_index)
        .fold((seed, seed, 1usize), |(high, low, count), (_, q)| {
            let below_top = q.value <= high;
            let width = if below_top { high - q.value } else { q.value - low };
            if width > channel_width {
                return (high, low, count);
            }
            if below_top {
                (high, low.min(q.value), count + 1)
            } else {
                (high.max(q.value), low, count + 1)
            }
        });

    ChannelCandidate {
        high,
        low,
        pivot_count,
        strength: 0.0,
    }
}

/// `pivot_count * 20` plus the number of recent candles whose high or low
/// lies inside the channel.
pub fn calculate_channel_strength(
    channel: &ChannelCandidate,
    candles: &[Candle],
    loopback_period: usize,
) -> f64 {
    let inside = |price: f64| channel.low <= price && price <= channel.high;
    let touches = tail(candles, loopback_period)
        .iter()
        .filter(|c| inside(c.high) || inside(c.low))
        .count();
    channel.pivot_count as f64 * Const::PIVOT_WEIGHT + touches as f64
}

pub fn determine_channel_type(high: f64, low: f64, current_price: f64) -> ChannelType {
    if high < current_price && low < current_price {
        ChannelType::Support
    } else if high > current_price && low > current_price {
        ChannelType::Resistance
    } else {
        ChannelType::Neutral
    }
}
