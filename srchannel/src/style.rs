//! RGBA colours for drawing channels. Fixed palette per channel type.

use crate::constant::ChannelType;

const RESISTANCE_RGB: (u8, u8, u8) = (239, 83, 80);
const SUPPORT_RGB: (u8, u8, u8) = (38, 166, 154);
const NEUTRAL_RGB: (u8, u8, u8) = (158, 158, 158);
const BORDER_ALPHA: f64 = 0.8;

fn rgb_of(channel_type: ChannelType) -> (u8, u8, u8) {
    match channel_type {
        ChannelType::Resistance => RESISTANCE_RGB,
        ChannelType::Support => SUPPORT_RGB,
        ChannelType::Neutral => NEUTRAL_RGB,
    }
}

fn rgba(rgb: (u8, u8, u8), alpha: f64) -> String {
    let (r, g, b) = rgb;
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Band fill. `opacity` is clamped into `[0, 1]`.
pub fn channel_fill_color(channel_type: ChannelType, opacity: f64) -> String {
    let alpha = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
    rgba(rgb_of(channel_type), alpha)
}

pub fn channel_border_color(channel_type: ChannelType) -> String {
    rgba(rgb_of(channel_type), BORDER_ALPHA)
}
