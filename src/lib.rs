//! # lsb_embed 库
//!
//! 本库包含基于分隔符终止的 LSB 隐写编解码器的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod steganography;
