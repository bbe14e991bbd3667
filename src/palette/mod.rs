//! 调色板模块
//!
//! 负责主调色板的装配, 以及伽马校正 / 量化 / 硬件格式打包三种派生变换。

pub mod builder;
pub mod color;
pub mod config;
pub mod encode;

pub use builder::build_master_palette;
pub use color::{Color5, ColorRgb8};
pub use config::{PALETTE_SIZE, PaletteConfig};

use crate::error::{PaletteError, Result};

/// 256 色调色板
///
/// 构造时校验条目数, 此后不可变; 索引 #0 始终是色键。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<ColorRgb8>,
}

impl Palette {
    /// 从条目列表构造, 条目数必须恰好为 256
    pub fn from_entries(entries: Vec<ColorRgb8>) -> Result<Self> {
        if entries.len() != PALETTE_SIZE {
            return Err(PaletteError::InvalidEntryCount {
                expected: PALETTE_SIZE,
                actual: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    /// 获取全部条目
    pub fn entries(&self) -> &[ColorRgb8] {
        &self.entries
    }

    /// 条目数 (恒为 256)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按条目顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = ColorRgb8> + '_ {
        self.entries.iter().copied()
    }

    /// 生成伽马校正后的新调色板, 按索引逐条目映射, 色键不做特殊处理
    pub fn gamma_corrected(&self, gamma: f64) -> Palette {
        Palette {
            entries: self
                .entries
                .iter()
                .map(|&c| encode::gamma_correct(c, gamma))
                .collect(),
        }
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = ColorRgb8;

    fn index(&self, index: usize) -> &ColorRgb8 {
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_rejects_wrong_length() {
        let short = vec![ColorRgb8::black(); 255];
        assert!(matches!(
            Palette::from_entries(short),
            Err(PaletteError::InvalidEntryCount {
                expected: 256,
                actual: 255
            })
        ));
    }

    #[test]
    fn test_gamma_corrected_preserves_order() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        let corrected = palette.gamma_corrected(2.3);

        assert_eq!(corrected.len(), PALETTE_SIZE);
        for (original, mapped) in palette.iter().zip(corrected.iter()) {
            assert_eq!(mapped, encode::gamma_correct(original, 2.3));
        }
    }

    #[test]
    fn test_gamma_corrected_color_key_is_not_special() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        let corrected = palette.gamma_corrected(2.3);
        assert_eq!(corrected[0], encode::gamma_correct(palette[0], 2.3));
    }
}
