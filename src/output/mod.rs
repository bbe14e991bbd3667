//! 产物序列化模块
//!
//! 四种产物共用同一个"按调色板顺序遍历 + 逐条目编码"的写入循环,
//! 区别只在每个条目的编码函数。输出为裸二进制, 无文件头和分隔符。

pub mod preview;

use crate::error::Result;
use crate::palette::{ColorRgb8, Palette, PaletteConfig, encode};
use byteorder::{BigEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 预览图文件名
pub const PREVIEW_FILE_NAME: &str = "master-palette-preview.png";

/// 产物类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// 原始 8 位 RGB 调色板
    Original,
    /// 伽马校正后的 8 位 RGB 调色板
    GammaCorrected,
    /// 量化后重新展开为 8 位的调色板 (无伽马校正, 供素材减色用)
    Quantized,
    /// 伽马校正 + 量化 + 打包的 16 位硬件调色板
    Hardware,
}

impl Artifact {
    /// 全部产物, 按固定输出顺序
    pub const ALL: [Artifact; 4] = [
        Artifact::Original,
        Artifact::GammaCorrected,
        Artifact::Quantized,
        Artifact::Hardware,
    ];

    /// 获取产物文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Original => "master-palette-original.rgb",
            Artifact::GammaCorrected => "master-palette-gamma-corrected.rgb",
            Artifact::Quantized => "master-palette-quantized.rgb",
            Artifact::Hardware => "master-palette.pal",
        }
    }

    /// 获取产物描述
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::Original => "原始主调色板",
            Artifact::GammaCorrected => "伽马校正主调色板",
            Artifact::Quantized => "量化主调色板 (未伽马校正)",
            Artifact::Hardware => "最终硬件主调色板",
        }
    }

    /// 每个条目的字节数
    pub fn bytes_per_entry(&self) -> usize {
        match self {
            Artifact::Hardware => 2,
            _ => 3,
        }
    }

    /// 产物总字节数
    pub fn total_bytes(&self, palette: &Palette) -> usize {
        self.bytes_per_entry() * palette.len()
    }

    /// 编码单个条目并写入
    fn encode_entry<W: Write>(
        &self,
        color: ColorRgb8,
        config: &PaletteConfig,
        writer: &mut W,
    ) -> Result<()> {
        match self {
            Artifact::Original => {
                writer.write_u8(color.r)?;
                writer.write_u8(color.g)?;
                writer.write_u8(color.b)?;
            }
            Artifact::GammaCorrected => {
                let corrected = encode::gamma_correct(color, config.gamma);
                writer.write_u8(corrected.r)?;
                writer.write_u8(corrected.g)?;
                writer.write_u8(corrected.b)?;
            }
            Artifact::Quantized => {
                let expanded = encode::quantize(color)?.expand();
                writer.write_u8(expanded.r)?;
                writer.write_u8(expanded.g)?;
                writer.write_u8(expanded.b)?;
            }
            Artifact::Hardware => {
                let corrected = encode::gamma_correct(color, config.gamma);
                let packed = encode::quantize(corrected)?.pack();
                // 每条目两个字节, 高字节在前
                writer.write_u16::<BigEndian>(packed)?;
            }
        }
        Ok(())
    }
}

/// 将一种产物写入指定目录, 返回写入的文件路径
pub fn write_artifact(
    palette: &Palette,
    config: &PaletteConfig,
    artifact: Artifact,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(artifact.file_name());
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    for color in palette.iter() {
        artifact.encode_entry(color, config, &mut writer)?;
    }

    writer.flush()?;
    Ok(path)
}

/// 按固定顺序写出全部四种产物
pub fn write_all_artifacts(palette: &Palette, config: &PaletteConfig, dir: &Path) -> Result<()> {
    for artifact in Artifact::ALL {
        let path = write_artifact(palette, config, artifact, dir)?;
        tracing::info!(
            " * 已写入{}: {:?} ({} 字节)",
            artifact.name(),
            path,
            artifact.total_bytes(palette)
        );
    }
    Ok(())
}
