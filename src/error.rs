//! # 错误类型
//!
//! 隐写核心的所有失败都在这里定义。命令行边界层再用 `anyhow` 为它们附加上下文。

use thiserror::Error;

/// 核心操作的结果类型别名。
pub type Result<T> = std::result::Result<T, StegoError>;

/// 隐写核心可能返回的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// 负载超出图像容量。在修改任何像素之前报告。
    #[error(
        "capacity exceeded: the frame needs {required_bits} bits but the image only holds {available_bits}"
    )]
    CapacityExceeded {
        required_bits: usize,
        available_bits: usize,
    },

    /// 帧无法解析：长度前缀不合理，或在读完之前像素已耗尽。
    #[error("corrupt frame: {0}")]
    CorruptFrame(#[from] CorruptFrame),

    /// 位序列比声明的字节数要短。正确的代码中不应出现。
    #[error("truncated input: expected {expected_bits} bits, got {actual_bits}")]
    TruncatedInput {
        expected_bits: usize,
        actual_bits: usize,
    },

    /// 负载超过长度前缀所允许的最大值。
    #[error("payload of {len} bytes exceeds the maximum of {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },

    /// 请求的通道数不在 `1..=像素通道数` 范围内。
    #[error("cannot use {requested} channels per pixel: the image has {available}")]
    ChannelSelection { requested: usize, available: usize },

    /// 像素数据的长度与尺寸不符。
    #[error("invalid pixel buffer: expected {expected} samples, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    /// 每像素的通道数不在 `1..=4` 范围内。
    #[error("unsupported pixel layout: {channels} channels per pixel (expected 1 to {max})")]
    UnsupportedChannels { channels: usize, max: usize },
}

/// `CorruptFrame` 的具体原因。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptFrame {
    #[error("declared payload length {declared} exceeds the maximum of {max} bytes")]
    ImplausibleLength { declared: usize, max: usize },

    #[error("the frame needs {required_bits} bits but only {available_bits} could be read")]
    Exhausted {
        required_bits: usize,
        available_bits: usize,
    },
}
