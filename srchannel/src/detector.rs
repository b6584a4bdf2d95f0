//! Candle series to ranked, non-overlapping support/resistance channels.
//!
//! Pipeline: pivot scan, recency merge, loopback filter, one candidate per
//! pivot, scoring, threshold, strength sort, greedy non-overlapping pick.
//! Every degenerate input ends in an empty list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bar::Candle;
use crate::channel::{
    ChannelCandidate, build_channel_from_pivot, calculate_channel_strength, channel_width,
    determine_channel_type,
};
use crate::config::SrChannelConfig;
use crate::constant::ChannelType;
use crate::pivot::{PivotPoint, find_pivot_highs, find_pivot_lows, merge_by_recency};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SRChannel {
    pub high: f64,
    pub low: f64,
    pub strength: f64,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
}

impl SRChannel {
    pub fn contains(&self, price: f64) -> bool {
        self.low <= price && price <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn mid(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.high >= other.low && self.low <= other.high
    }
}

#[derive(Debug, Clone, Default)]
pub struct SrChannelDetector {
    config: SrChannelConfig,
}

impl SrChannelDetector {
    pub fn with_config(config: SrChannelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SrChannelConfig {
        &self.config
    }

    pub fn detect(&self, candles: &[Candle]) -> Vec<SRChannel> {
        calculate_sr_channels(candles, &self.config)
    }
}

pub fn calculate_sr_channels(candles: &[Candle], config: &SrChannelConfig) -> Vec<SRChannel> {
    if candles.len() < config.min_candles() {
        debug!(
            candles = candles.len(),
            required = config.min_candles(),
            "not enough candles for a pivot window"
        );
        return Vec::new();
    }
    // The guard above leaves at least one candle.
    let Some(latest) = candles.last() else {
        return Vec::new();
    };
    let current_index = candles.len() - 1;

    let highs = find_pivot_highs(candles, config.pivot_period, config.source);
    let lows = find_pivot_lows(candles, config.pivot_period, config.source);
    debug!(highs = highs.len(), lows = lows.len(), "pivot scan done");

    // Only recent pivots seed candidates, but every pivot can be absorbed.
    let pivots: Vec<PivotPoint> = merge_by_recency(highs, lows);
    let seeds: Vec<usize> = pivots
        .iter()
        .enumerate()
        .filter(|(_, p)| current_index - p.index <= config.loopback_period)
        .map(|(idx, _)| idx)
        .collect();
    if seeds.is_empty() {
        debug!(
            pivots = pivots.len(),
            loopback = config.loopback_period,
            "no pivots inside loopback window"
        );
        return Vec::new();
    }

    let width = channel_width(candles, config.channel_width_percent);
    let threshold = config.strength_threshold();

    let mut candidates: Vec<ChannelCandidate> = seeds
        .iter()
        .map(|&idx| {
            let mut candidate = build_channel_from_pivot(idx, &pivots, width);
            candidate.strength =
                calculate_channel_strength(&candidate, candles, config.loopback_period);
            candidate
        })
        .filter(|c| c.strength >= threshold)
        .collect();
    debug!(
        pivots = pivots.len(),
        seeds = seeds.len(),
        channel_width = width,
        candidates = candidates.len(),
        "channel candidates scored"
    );
    if candidates.is_empty() {
        return Vec::new();
    }

    // Stable: equal strengths keep newest-seed-first order.
    candidates.sort_by(|a, b| b.strength.total_cmp(&a.strength));

    let mut accepted: Vec<ChannelCandidate> = Vec::new();
    for candidate in candidates {
        if accepted.len() >= config.max_channels {
            break;
        }
        if accepted.iter().all(|a| !candidate.overlaps(a.low, a.high)) {
            accepted.push(candidate);
        }
    }

    let current_price = latest.close;
    debug!(accepted = accepted.len(), current_price, "channels selected");
    accepted
        .into_iter()
        .map(|c| SRChannel {
            high: c.high,
            low: c.low,
            strength: c.strength,
            channel_type: determine_channel_type(c.high, c.low, current_price),
        })
        .collect()
}

/// Closest channel lying entirely below `price`.
pub fn nearest_support(channels: &[SRChannel], price: f64) -> Option<&SRChannel> {
    channels
        .iter()
        .filter(|c| c.high < price)
        .min_by(|a, b| (price - a.high).total_cmp(&(price - b.high)))
}

/// Closest channel lying entirely above `price`.
pub fn nearest_resistance(channels: &[SRChannel], price: f64) -> Option<&SRChannel> {
    channels
        .iter()
        .filter(|c| c.low > price)
        .min_by(|a, b| (a.low - price).total_cmp(&(b.low - price)))
}
