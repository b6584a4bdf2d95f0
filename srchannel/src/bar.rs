use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV candle. `timestamp` is epoch milliseconds.
///
/// `low <= open, close <= high` is expected but never checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }

    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// The most recent `count` candles, or all of them when fewer exist.
pub fn tail(candles: &[Candle], count: usize) -> &[Candle] {
    &candles[candles.len().saturating_sub(count)..]
}
