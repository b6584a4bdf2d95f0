use serde::Serialize;
use srchannel::{
    Candle, SRChannel, SrChannelConfig, Timeframe, calculate_sr_channels, channel_border_color,
    channel_fill_color,
};

/// Fill opacity for the strongest channel; weaker ones fade toward half of it.
const MAX_FILL_OPACITY: f64 = 0.35;

#[derive(Debug, Serialize)]
pub struct ExportPayload {
    pub symbol: String,
    pub timeframe: String,
    pub config: SrChannelConfig,
    pub candles: Vec<CandlePoint>,
    pub channels: Vec<ChannelBand>,
}

#[derive(Debug, Serialize)]
pub struct CandlePoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Serialize)]
pub struct ChannelBand {
    #[serde(flatten)]
    pub channel: SRChannel,
    pub fill: String,
    pub border: String,
}

pub fn build_export(
    symbol: &str,
    timeframe: Timeframe,
    candles: &[Candle],
    config: &SrChannelConfig,
) -> ExportPayload {
    let channels = calculate_sr_channels(candles, config);
    let top_strength = channels.first().map(|c| c.strength).unwrap_or_default();

    ExportPayload {
        symbol: symbol.to_string(),
        timeframe: timeframe.as_str().to_string(),
        config: config.clone(),
        candles: candles
            .iter()
            .map(|c| CandlePoint {
                time: c.timestamp / 1000,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
            })
            .collect(),
        channels: channels
            .into_iter()
            .map(|channel| ChannelBand {
                fill: channel_fill_color(
                    channel.channel_type,
                    fill_opacity(channel.strength, top_strength),
                ),
                border: channel_border_color(channel.channel_type),
                channel,
            })
            .collect(),
    }
}

fn fill_opacity(strength: f64, top_strength: f64) -> f64 {
    if top_strength <= 0.0 {
        return MAX_FILL_OPACITY;
    }
    let ratio = (strength / top_strength).clamp(0.0, 1.0);
    MAX_FILL_OPACITY * (0.5 + 0.5 * ratio)
}
