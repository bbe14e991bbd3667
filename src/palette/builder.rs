//! 主调色板装配
//!
//! 生成顺序固定: 色键 + 色立方 + 纯灰色 + 常用色。
//! 条目顺序是调色板与资源管线之间的索引契约, 不允许改变。

use super::Palette;
use super::color::ColorRgb8;
use super::config::PaletteConfig;
use crate::error::Result;

/// 将某一轴上第 i 级 (共 levels 级) 映射为 8 位通道值:
/// 在 [0, 255] 上均匀取 levels 个点, 两端点都包含
fn axis_sample(i: usize, levels: usize) -> u8 {
    (255.0 * i as f64 / (levels - 1) as f64).round() as u8
}

/// 灰度第 g 级 (从 0 起) 的亮度, 偏移量刻意避开纯黑和纯白
fn gray_sample(g: usize, levels: usize) -> u8 {
    (255.0 * (g + 1) as f64 / (levels + 1) as f64).round() as u8
}

/// 按配置装配完整的 256 色主调色板
///
/// 条目数不等于 256 时返回 `InvalidEntryCount`, 绝不静默截断。
pub fn build_master_palette(config: &PaletteConfig) -> Result<Palette> {
    let mut entries = Vec::with_capacity(config.entry_count());

    // 索引 #0 保留给色键
    entries.push(config.color_key);

    // 色立方: 红为最外层循环, 蓝为最内层
    for r in 0..config.red_levels {
        for g in 0..config.green_levels {
            for b in 0..config.blue_levels {
                entries.push(ColorRgb8::new(
                    axis_sample(r, config.red_levels),
                    axis_sample(g, config.green_levels),
                    axis_sample(b, config.blue_levels),
                ));
            }
        }
    }

    // 纯灰色
    for g in 0..config.gray_levels {
        let level = gray_sample(g, config.gray_levels);
        entries.push(ColorRgb8::new(level, level, level));
    }

    // 常用色按声明顺序追加
    entries.extend_from_slice(&config.accent_colors);

    Palette::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::config::PALETTE_SIZE;

    #[test]
    fn test_master_palette_size() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        assert_eq!(palette.len(), PALETTE_SIZE);
    }

    #[test]
    fn test_color_key_at_index_zero() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        assert_eq!(palette[0], ColorRgb8::new(106, 76, 48));
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = PaletteConfig::master();
        let first = build_master_palette(&config).unwrap();
        let second = build_master_palette(&config).unwrap();
        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn test_cube_corners() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        // 色立方占索引 1..=240, 首尾分别是纯黑和纯白
        assert_eq!(palette[1], ColorRgb8::black());
        assert_eq!(palette[240], ColorRgb8::white());
    }

    #[test]
    fn test_red_axis_samples() {
        // 6 级红: 0, 51, 102, 153, 204, 255
        // 立方内索引 = 1 + r*40 + g*5 + b
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        let expected = [0u8, 51, 102, 153, 204, 255];
        for (r, &value) in expected.iter().enumerate() {
            assert_eq!(palette[1 + r * 40].r, value);
        }
    }

    #[test]
    fn test_gray_entries() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        let expected = [28u8, 57, 85, 113, 142, 170, 198, 227];
        for (g, &level) in expected.iter().enumerate() {
            let color = palette[241 + g];
            assert_eq!(color, ColorRgb8::new(level, level, level));
        }
    }

    #[test]
    fn test_accent_entries() {
        let config = PaletteConfig::master();
        let palette = build_master_palette(&config).unwrap();
        for (i, &accent) in config.accent_colors.iter().enumerate() {
            assert_eq!(palette[249 + i], accent);
        }
        assert_eq!(palette[255], ColorRgb8::new(28, 95, 139));
    }

    #[test]
    fn test_inconsistent_config_is_rejected() {
        use crate::error::PaletteError;

        // 多加一级灰会把总数推到 257
        let mut config = PaletteConfig::master();
        config.gray_levels = 9;
        assert!(matches!(
            build_master_palette(&config),
            Err(PaletteError::InvalidEntryCount {
                expected: 256,
                actual: 257
            })
        ));
    }
}
