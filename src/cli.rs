//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_CHANNELS_USED;
use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复任意文件。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复任意文件。\n隐藏的数据以 32 位长度前缀开头，恢复时无需任何结束标记。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出更多日志 (可重复，如 -vv)。
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// 只输出错误，优先于 --verbose。
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏文件或文本。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的数据。
    Recover(RecoverArgs),

    /// 查询图像最多能隐藏多少字节。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文件路径。
    #[arg(short, long, required_unless_present = "message", conflicts_with = "message")]
    pub text: Option<PathBuf>,

    /// 直接隐藏命令行上给出的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 隐写完成后，保存结果图像的输出路径。默认为输入图像旁的 `doctored_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,

    /// 每个像素参与隐写的通道数 (3 = RGB，4 = RGBA)。恢复时必须使用相同的值。
    #[arg(short, long, default_value_t = DEFAULT_CHANNELS_USED)]
    pub channels: usize,
}

/// 'recover' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// 已隐藏数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复后保存数据的输出路径。默认为输入图像旁的 `recovered_<名称>.bin`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,

    /// 每个像素参与隐写的通道数，必须与隐藏时一致。
    #[arg(short, long, default_value_t = DEFAULT_CHANNELS_USED)]
    pub channels: usize,
}

/// 'capacity' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 要查询的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 每个像素参与隐写的通道数。
    #[arg(short, long, default_value_t = DEFAULT_CHANNELS_USED)]
    pub channels: usize,
}
