use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Which per-candle values define "high" and "low" for pivot detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PivotSource {
    #[default]
    #[serde(rename = "High/Low", alias = "high_low", alias = "HighLow")]
    HighLow,
    #[serde(rename = "Close/Open", alias = "close_open", alias = "CloseOpen")]
    CloseOpen,
}

impl PivotSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighLow => "High/Low",
            Self::CloseOpen => "Close/Open",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DataError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high/low" | "high_low" | "highlow" => Ok(Self::HighLow),
            "close/open" | "close_open" | "closeopen" => Ok(Self::CloseOpen),
            _ => Err(DataError::InvalidSource(value.to_string())),
        }
    }
}

/// Position of a channel relative to the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Resistance,
    Support,
    Neutral,
}

impl ChannelType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resistance => "resistance",
            Self::Support => "support",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    M1,
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DataError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1m" => Ok(Self::M1),
            "5m" => Ok(Self::M5),
            "15m" => Ok(Self::M15),
            "1h" => Ok(Self::H1),
            "4h" => Ok(Self::H4),
            "1d" => Ok(Self::D1),
            _ => Err(DataError::InvalidTimeframe(value.to_string())),
        }
    }
}

pub struct Const;

impl Const {
    /// Candles considered when sizing the channel width.
    pub const WIDTH_LOOKBACK_LIMIT: usize = 300;
    /// Strength contributed by each absorbed pivot.
    pub const PIVOT_WEIGHT: f64 = 20.0;
}

#[derive(Debug)]
pub enum DataError {
    InvalidTimeframe(String),
    InvalidDatetime(String),
    InvalidSource(String),
    UnsupportedFormat(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeframe(v) => write!(f, "invalid timeframe: {v}"),
            Self::InvalidDatetime(v) => write!(f, "invalid datetime: {v}"),
            Self::InvalidSource(v) => write!(f, "invalid pivot source: {v}"),
            Self::UnsupportedFormat(v) => write!(f, "unsupported config format: {v}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Yaml(e) => write!(f, "yaml error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for DataError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_yaml::Error> for DataError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
