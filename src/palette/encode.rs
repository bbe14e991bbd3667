//! 伽马校正与量化
//!
//! 两者都是按通道独立作用的纯函数, 不会重排或合并调色板条目。

use super::color::{Color5, ColorRgb8};
use crate::error::Result;

/// 对单个 8 位通道做伽马校正: round(((c/255)^(1/gamma)) * 255)
pub fn gamma_correct_channel(c: u8, gamma: f64) -> u8 {
    (((c as f64 / 255.0).powf(1.0 / gamma)) * 255.0).round() as u8
}

/// 对整个颜色做伽马校正
pub fn gamma_correct(color: ColorRgb8, gamma: f64) -> ColorRgb8 {
    ColorRgb8::new(
        gamma_correct_channel(color.r, gamma),
        gamma_correct_channel(color.g, gamma),
        gamma_correct_channel(color.b, gamma),
    )
}

/// 将单个 8 位通道量化到 5 位: round(c/255 * 31)
pub fn quantize_channel(c: u8) -> u8 {
    (c as f64 / 255.0 * 31.0).round() as u8
}

/// 将整个颜色量化到每通道 5 位
pub fn quantize(color: ColorRgb8) -> Result<Color5> {
    Color5::new(
        quantize_channel(color.r),
        quantize_channel(color.g),
        quantize_channel(color.b),
    )
}
