//! 颜色值类型定义

use crate::error::{PaletteError, Result};

/// RGB 颜色结构 (每通道 8 位)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 创建黑色
    pub const fn black() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }

    /// 创建白色
    pub const fn white() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
        }
    }

    /// 格式化为十六进制颜色字符串 (如 "#FF0000")
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// 格式化为 RGB 字符串 (如 "rgb(255, 0, 0)")
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for ColorRgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color(#{:02X}{:02X}{:02X})", self.r, self.g, self.b)
    }
}

impl std::fmt::LowerHex for ColorRgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::UpperHex for ColorRgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// 量化后的 RGB 颜色 (每通道 5 位, 取值 [0, 31])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color5 {
    r: u8,
    g: u8,
    b: u8,
}

/// 5 位通道的最大值
pub const CHANNEL_MAX_5BIT: u8 = 31;

/// 硬件格式的不透明标志位 (bit 15)
pub const OPAQUE_FLAG: u16 = 0x8000;

impl Color5 {
    /// 创建量化颜色, 各通道必须在 [0, 31] 范围内
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self> {
        for (channel, value) in [("红", r), ("绿", g), ("蓝", b)] {
            if value > CHANNEL_MAX_5BIT {
                return Err(PaletteError::ChannelOutOfRange {
                    channel,
                    value: value as u16,
                    max: CHANNEL_MAX_5BIT as u16,
                });
            }
        }
        Ok(Self { r, g, b })
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }

    /// 打包为 16 位硬件格式 (BGR555, bit 15 为不透明标志)
    pub const fn pack(self) -> u16 {
        OPAQUE_FLAG | self.r as u16 | (self.g as u16) << 5 | (self.b as u16) << 10
    }

    /// 从 16 位硬件格式解包 (忽略不透明标志位)
    pub const fn unpack(packed: u16) -> Self {
        Self {
            r: (packed & 0x1F) as u8,
            g: ((packed >> 5) & 0x1F) as u8,
            b: ((packed >> 10) & 0x1F) as u8,
        }
    }

    /// 重新展开为 8 位颜色 (仅用于诊断/工具链, 精度低于原始值)
    pub fn expand(self) -> ColorRgb8 {
        ColorRgb8::new(
            expand_channel(self.r),
            expand_channel(self.g),
            expand_channel(self.b),
        )
    }
}

/// 将 5 位通道值重新映射到 [0, 255]
fn expand_channel(q: u8) -> u8 {
    (255.0 / 31.0 * q as f64).round() as u8
}
