//! # 图像适配器模块
//!
//! 负责在图像文件与编解码器操作的扁平像素缓冲区之间转换。
//! 任何输入图像都会先被转换为 3 通道 RGB 表示；同一轮往返中
//! 通道数与扫描顺序保持稳定。

use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::path::Path;

/// 每个像素的颜色通道数 (R, G, B)。
pub const CHANNELS: usize = 3;

/// 读取并解码图像文件，返回尺寸与按行优先、通道连续排列的像素缓冲区。
pub fn decode_image(path: &Path) -> Result<(u32, u32, Vec<u8>)> {
    let img = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let (width, height) = img.dimensions();
    Ok((width, height, img.into_raw()))
}

/// 将像素缓冲区重新组装为 RGB 图像并写入目标路径。
/// 输出容器格式由目标路径的扩展名决定，必须是无损格式。
pub fn encode_image(width: u32, height: u32, pixels: Vec<u8>, path: &Path) -> Result<()> {
    let img = RgbImage::from_raw(width, height, pixels)
        .context("The pixel buffer length does not match the image dimensions.")?;

    img.save(path).with_context(|| {
        format!(
            "Unable to write image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}
