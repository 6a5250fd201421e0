//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，通过分隔符标记消息结尾，在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，通过分隔符标记消息结尾，在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 查询图像最多能隐藏多少比特与字符。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 省略时在输入图像旁生成 `doctored_<原文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 当输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本后，保存文本内容的输出路径。
    /// 省略时在输入图像旁生成 `recovered_<原文件主名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 当输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询承载容量的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
