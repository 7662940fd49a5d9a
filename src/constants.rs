//! # 兼容性常量
//!
//! 隐藏与恢复两端必须使用完全相同的取值，否则无法解码。

/// 长度前缀的位宽 (W)。
/// 帧以一个大端 `u32` 开头，记录负载的字节数。
pub const LENGTH_PREFIX_BITS: usize = 32;

/// 每个像素默认参与隐写的通道数 (R, G, B)，Alpha 通道被跳过。
pub const DEFAULT_CHANNELS_USED: usize = 3;

/// 允许的最大负载 (10 MiB)。
/// 解码时若长度前缀超过此值，则视为损坏的帧，而不是去读取一个巨大的长度。
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// 像素允许的最大通道数 (RGBA)。
pub const MAX_CHANNELS_PER_PIXEL: usize = 4;

/// `hide` 未指定输出路径时，输出图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// `recover` 未指定输出路径时，输出文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";
