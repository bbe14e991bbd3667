//! Palette Generator - 主调色板生成器
//!
//! 为掌机的 16 位屏幕生成固定的 256 色主调色板, 并输出四种二进制产物:
//! - 原始 8 位 RGB 调色板 (.rgb)
//! - 伽马校正后的 8 位 RGB 调色板 (.rgb)
//! - 量化后重新展开的 8 位 RGB 调色板 (.rgb, 供素材减色用)
//! - 伽马校正 + 量化 + BGR555 打包的硬件调色板 (.pal)

#![warn(missing_docs)]
#![allow(dead_code)]

mod error;
mod output;
mod palette;

use error::Result;
use palette::PaletteConfig;
use tracing::{Level, debug, info};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // 解析命令行参数
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let with_preview = args.iter().any(|a| a == "--preview");

    run(with_preview)
}

/// 生成主调色板并写出全部产物
fn run(with_preview: bool) -> Result<()> {
    let config = PaletteConfig::master();

    info!(
        "生成 {} 个基础色的主调色板: {} 级红 x {} 级绿 x {} 级蓝",
        config.cube_count(),
        config.red_levels,
        config.green_levels,
        config.blue_levels
    );
    info!(
        "索引 #0 保留给色键 {}, 另有 {} 级纯灰和 {} 个常用色",
        config.color_key.to_hex_string(),
        config.gray_levels,
        config.accent_colors.len()
    );

    let palette = palette::build_master_palette(&config)?;

    for (index, color) in palette.iter().enumerate() {
        debug!("  + 颜色索引 #{}: {}", index, color);
    }
    info!("调色板共 {} 个颜色索引", palette.len());

    let out_dir = std::env::current_dir()?;
    output::write_all_artifacts(&palette, &config, &out_dir)?;

    if with_preview {
        let path = out_dir.join(output::PREVIEW_FILE_NAME);
        output::preview::export_preview(&palette, &path)?;
        info!(" * 已写入预览图: {:?}", path);
    }

    info!("主调色板生成完成");
    info!(
        "用 '{}' 做素材减色, 用 '{}' 作为实际硬件调色板",
        output::Artifact::Quantized.file_name(),
        output::Artifact::Hardware.file_name()
    );

    Ok(())
}

/// 打印使用说明
fn print_usage() {
    println!("{} v{}", APP_NAME, APP_VERSION);
    println!();
    println!("使用方法:");
    println!("  palette_generator [选项]");
    println!();
    println!("选项:");
    println!("  --preview          额外导出 PNG 预览图");
    println!("  --help, -h         显示帮助信息");
    println!();
    println!("产物写入当前工作目录。");
}

/// 应用程序名称
pub const APP_NAME: &str = "Palette Generator";

/// 应用程序版本（从 Cargo.toml 读取）
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
