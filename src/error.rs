//! # 编解码器错误类型模块
//!
//! 定义核心编解码操作可能返回的所有错误种类。
//! 每个错误都是确定性的，只作用于单次编码或解码调用。

use std::fmt;

/// 编码或解码过程中可能出现的错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// 消息或像素缓冲区为空。
    EmptyInput,
    /// 消息中包含码点超过 255 的字符，无法打包为 8 bits。
    UnsupportedCharacter(char),
    /// 消息比特流 (含分隔符) 超出了图像的承载容量。
    CapacityExceeded {
        /// 嵌入所需的比特数。
        required: usize,
        /// 图像可提供的比特数。
        available: usize,
        /// 面向用户报告的最大可隐藏字符数 (容量 / 8)。
        max_chars: usize,
    },
    /// 在整个缓冲区的比特序列中未找到分隔符。
    NoMessageFound,
    /// 找到了分隔符，但其之前的比特数不是 8 的整数倍。
    MalformedPayload {
        /// 分隔符之前的有效载荷比特数。
        bit_count: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "The message and the image must both be non-empty.")
            }
            Self::UnsupportedCharacter(character) => {
                write!(
                    f,
                    "Character '{}' (U+{:04X}) does not fit into 8 bits and cannot be hidden.",
                    character,
                    u32::from(*character)
                )
            }
            Self::CapacityExceeded {
                required,
                available,
                max_chars,
            } => {
                write!(
                    f,
                    "Not enough space in the image to hide the text. \
                     Required: {required} bits, Available: {available} bits \
                     (at most {max_chars} characters)."
                )
            }
            Self::NoMessageFound => {
                write!(f, "No hidden message was found in the image.")
            }
            Self::MalformedPayload { bit_count } => {
                write!(
                    f,
                    "Found the end marker after {bit_count} bits, which is not a whole \
                     number of characters. The image data appears to be corrupted."
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}
