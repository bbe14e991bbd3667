//! 错误类型定义

use thiserror::Error;

/// 调色板生成器错误类型
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("预览图编码错误: {0}")]
    ImageEncode(#[from] image::ImageError),

    #[error("调色板条目数无效: 预期 {expected} 个, 实际 {actual} 个")]
    InvalidEntryCount { expected: usize, actual: usize },

    #[error("{channel} 通道值超出范围: {value} (最大 {max})")]
    ChannelOutOfRange {
        channel: &'static str,
        value: u16,
        max: u16,
    },
}

pub type Result<T> = std::result::Result<T, PaletteError>;
