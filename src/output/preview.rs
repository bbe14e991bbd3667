//! 调色板预览图导出
//!
//! 把 256 个条目渲染成 16x16 的色块网格, 导出为 PNG, 仅供人工查看。

use crate::error::Result;
use crate::palette::Palette;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// 每行/列的色块数
const GRID_DIM: u32 = 16;

/// 单个色块的边长 (像素)
const SWATCH_SIZE: u32 = 16;

/// 将调色板渲染为色块网格图像, 按索引从左到右、从上到下排列
pub fn render_preview(palette: &Palette) -> RgbaImage {
    let side = GRID_DIM * SWATCH_SIZE;
    let mut img = RgbaImage::new(side, side);

    for (index, color) in palette.iter().enumerate() {
        let cell_x = (index as u32 % GRID_DIM) * SWATCH_SIZE;
        let cell_y = (index as u32 / GRID_DIM) * SWATCH_SIZE;
        let pixel = Rgba([color.r, color.g, color.b, 255]);

        for dy in 0..SWATCH_SIZE {
            for dx in 0..SWATCH_SIZE {
                img.put_pixel(cell_x + dx, cell_y + dy, pixel);
            }
        }
    }

    img
}

/// 渲染并保存预览图
pub fn export_preview(palette: &Palette, path: &Path) -> Result<()> {
    let img = render_preview(palette);
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PaletteConfig, build_master_palette};

    #[test]
    fn test_preview_dimensions() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        let img = render_preview(&palette);
        assert_eq!(img.dimensions(), (256, 256));
    }

    #[test]
    fn test_preview_swatch_colors() {
        let palette = build_master_palette(&PaletteConfig::master()).unwrap();
        let img = render_preview(&palette);

        // 左上角色块是色键
        assert_eq!(img.get_pixel(0, 0), &Rgba([106, 76, 48, 255]));
        // 右下角色块是最后一个常用色 (28, 95, 139)
        assert_eq!(img.get_pixel(255, 255), &Rgba([28, 95, 139, 255]));
    }
}
