use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constant::{DataError, PivotSource, Timeframe};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrChannelConfig {
    /// Neighbours required on each side of a pivot.
    pub pivot_period: usize,
    /// Absorption width as a percentage of the recent high-low range.
    pub channel_width_percent: f64,
    /// Minimum strength in units of pivot count.
    pub min_strength: f64,
    pub max_channels: usize,
    /// Recent candles in scope for pivot relevance and touch counting.
    pub loopback_period: usize,
    pub source: PivotSource,
}

impl Default for SrChannelConfig {
    fn default() -> Self {
        Self {
            pivot_period: 10,
            channel_width_percent: 5.0,
            min_strength: 1.0,
            max_channels: 6,
            loopback_period: 290,
            source: PivotSource::HighLow,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SrChannelConfigPatch {
    #[serde(default, alias = "pivotPeriod")]
    pub pivot_period: Option<usize>,
    #[serde(default, alias = "channelWidthPercent")]
    pub channel_width_percent: Option<f64>,
    #[serde(default, alias = "minStrength")]
    pub min_strength: Option<f64>,
    #[serde(default, alias = "maxChannels")]
    pub max_channels: Option<usize>,
    #[serde(default, alias = "loopbackPeriod")]
    pub loopback_period: Option<usize>,
    #[serde(default)]
    pub source: Option<PivotSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SrChannelProfileConfig {
    #[serde(default)]
    pub default: SrChannelConfigPatch,
    #[serde(default)]
    pub timeframe: HashMap<String, SrChannelConfigPatch>,
    #[serde(default)]
    pub symbol: HashMap<String, SrChannelConfigPatch>,
    #[serde(default)]
    pub symbol_timeframe: HashMap<String, SrChannelConfigPatch>,
}

impl SrChannelConfig {
    pub fn apply_patch(mut self, patch: SrChannelConfigPatch) -> Self {
        if let Some(v) = patch.pivot_period {
            self.pivot_period = v;
        }
        if let Some(v) = patch.channel_width_percent {
            self.channel_width_percent = v;
        }
        if let Some(v) = patch.min_strength {
            self.min_strength = v;
        }
        if let Some(v) = patch.max_channels {
            self.max_channels = v;
        }
        if let Some(v) = patch.loopback_period {
            self.loopback_period = v;
        }
        if let Some(v) = patch.source {
            self.source = v;
        }
        self
    }

    /// Smallest candle count that can hold a single pivot window.
    pub fn min_candles(&self) -> usize {
        self.pivot_period.saturating_mul(2).saturating_add(1)
    }

    /// Strength threshold in raw score units.
    pub fn strength_threshold(&self) -> f64 {
        self.min_strength * crate::constant::Const::PIVOT_WEIGHT
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let patch: SrChannelConfigPatch = serde_yaml::from_str(yaml)?;
        Ok(Self::default().apply_patch(patch))
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let patch: SrChannelConfigPatch = serde_json::from_str(json)?;
        Ok(Self::default().apply_patch(patch))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&raw)?)
    }
}

impl SrChannelProfileConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Loads a profile, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        match path.extension().and_then(|x| x.to_str()) {
            Some("json") => Ok(serde_json::from_str(&text)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
            other => Err(DataError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    pub fn resolve_for(&self, symbol: &str, timeframe: Timeframe) -> SrChannelConfig {
        let symbol_norm = normalize_key(symbol);
        let tf_norm = timeframe.as_str().to_string();
        let symbol_tf = format!("{symbol_norm}.{tf_norm}");
        let symbol_wild = format!("{symbol_norm}.*");
        let tf_wild = format!("*.{tf_norm}");

        let mut config = SrChannelConfig::default().apply_patch(self.default.clone());

        if let Some(patch) = find_patch(&self.timeframe, &tf_norm) {
            config = config.apply_patch(patch.clone());
        }
        if let Some(patch) = find_patch(&self.symbol, &symbol_norm) {
            config = config.apply_patch(patch.clone());
        }
        for key in [&tf_wild, &symbol_wild, &symbol_tf] {
            if let Some(patch) = find_patch(&self.symbol_timeframe, key) {
                config = config.apply_patch(patch.clone());
            }
        }

        config
    }
}

fn normalize_key(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

fn find_patch<'a>(
    map: &'a HashMap<String, SrChannelConfigPatch>,
    key: &str,
) -> Option<&'a SrChannelConfigPatch> {
    let key_norm = normalize_key(key);
    map.iter()
        .find(|(k, _)| normalize_key(k) == key_norm)
        .map(|(_, v)| v)
}
