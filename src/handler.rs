//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像适配器、核心编解码算法，
//! 以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::BITS_PER_CHAR;
use crate::image_io::{CHANNELS, decode_image, encode_image};
use crate::steganography::{capacity, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、调用编码核心将消息嵌入像素缓冲区，
/// 最后将结果图像写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像没有足够的容量隐藏文本，或文本含有无法打包的字符。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let (width, height, pixels) = decode_image(&args.image)?;

    let dest = args.dest.unwrap_or_else(|| default_hide_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let stego = encode(&pixels, &message)?;

    encode_image(width, height, stego, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用解码核心提取隐藏消息，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像中不含分隔符标记，或标记之前的数据已损坏。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let (_width, _height, pixels) = decode_image(&args.image)?;

    let message = decode(&pixels).with_context(|| {
        format!(
            "Failed to recover text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = args.text.unwrap_or_else(|| default_recover_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, &message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 读取图像并报告其可承载的比特数，以及按 容量/8 约定
/// 折算出的最大可隐藏字符数。
///
/// # Errors
///
/// 如果无法读取输入的图像文件，将返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let (width, height, pixels) = decode_image(&args.image)?;

    let bits = capacity(&pixels);
    let chars = bits / BITS_PER_CHAR;

    println!(
        "{} ({}x{}, {} channels) can carry up to {} bits, roughly {} characters.",
        args.image.to_string_lossy().green().bold(),
        width,
        height,
        CHANNELS,
        bits.to_string().green().bold(),
        chars.to_string().green().bold()
    );

    Ok(())
}

/// 校验目标路径可写：文件已存在且未指定 `--force` 时报错。
fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 为 'hide' 命令生成默认输出路径：输入图像旁的 `doctored_<原文件名>`。
fn default_hide_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image.png"));
    image.with_file_name(format!("doctored_{name}"))
}

/// 为 'recover' 命令生成默认输出路径：输入图像旁的 `recovered_<原文件主名>.txt`。
fn default_recover_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));
    image.with_file_name(format!("recovered_{stem}.txt"))
}
