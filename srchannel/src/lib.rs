pub mod bar;
pub mod channel;
pub mod config;
pub mod constant;
pub mod detector;
pub mod logging;
pub mod pivot;
pub mod receiver;
pub mod style;

pub use bar::{Candle, tail};
pub use channel::{
    ChannelCandidate, build_channel_from_pivot, calculate_channel_strength, channel_width,
    determine_channel_type,
};
pub use config::{SrChannelConfig, SrChannelConfigPatch, SrChannelProfileConfig};
pub use constant::{ChannelType, Const, DataError, PivotSource, Timeframe};
pub use detector::{
    SRChannel, SrChannelDetector, calculate_sr_channels, nearest_resistance, nearest_support,
};
pub use logging::{init_logging, init_logging_with_level};
pub use pivot::{PivotPoint, find_pivot_highs, find_pivot_lows, merge_by_recency};
pub use receiver::{load_candles_csv, parse_timestamp_ms, read_candles_csv};
pub use style::{channel_border_color, channel_fill_color};
