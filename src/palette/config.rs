//! 调色板生成参数定义
//!
//! 所有常量集中在一个不可变的配置值中, 传入构建器使用,
//! 便于用其他参数单独测试构建逻辑。

use super::color::ColorRgb8;

/// 调色板生成参数
#[derive(Debug, Clone)]
pub struct PaletteConfig {
    /// 红色通道的采样级数
    pub red_levels: usize,
    /// 绿色通道的采样级数
    pub green_levels: usize,
    /// 蓝色通道的采样级数
    pub blue_levels: usize,
    /// 索引 #0 保留的透明色键
    pub color_key: ColorRgb8,
    /// 纯灰色条目数 (不含纯黑和纯白)
    pub gray_levels: usize,
    /// 手工指定的常用颜色, 按声明顺序追加在末尾
    pub accent_colors: Vec<ColorRgb8>,
    /// 目标屏幕的伽马校正系数
    pub gamma: f64,
}

/// 调色板固定条目数
pub const PALETTE_SIZE: usize = 256;

impl PaletteConfig {
    /// 主调色板的标准参数: 6x8x5 色立方 + 色键 + 8 级灰 + 7 个常用色
    pub fn master() -> Self {
        Self {
            red_levels: 6,
            green_levels: 8,
            blue_levels: 5,
            // 0x6A4C30
            color_key: ColorRgb8::new(106, 76, 48),
            gray_levels: 8,
            accent_colors: vec![
                // 主角 Stan 的两种蓝色
                ColorRgb8::new(6, 177, 220),
                ColorRgb8::new(4, 147, 183),
                // 头发的棕黑色
                ColorRgb8::new(70, 59, 42),
                // 两种肤色
                ColorRgb8::new(238, 190, 141),
                ColorRgb8::new(250, 205, 155),
                // 金发的黄色
                ColorRgb8::new(255, 255, 111),
                // 另一种蓝色
                ColorRgb8::new(28, 95, 139),
            ],
            gamma: 2.3,
        }
    }

    /// 色立方的条目数
    pub fn cube_count(&self) -> usize {
        self.red_levels * self.green_levels * self.blue_levels
    }

    /// 按当前参数生成的总条目数 (色键 + 色立方 + 灰色 + 常用色)
    pub fn entry_count(&self) -> usize {
        1 + self.cube_count() + self.gray_levels + self.accent_colors.len()
    }
}
