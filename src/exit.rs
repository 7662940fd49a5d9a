//! # 退出码
//!
//! 每一类核心错误对应一个独立的退出码，便于脚本区分失败原因。

use crate::error::StegoError;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;
pub const CAPACITY_EXCEEDED: u8 = 3;
pub const CORRUPT_FRAME: u8 = 4;
pub const PAYLOAD_TOO_LARGE: u8 = 5;
pub const USAGE: u8 = 64;
pub const DATA_INVALID: u8 = 65;
pub const INTERNAL: u8 = 70;

/// 根据错误链中第一个 [`StegoError`] 选择退出码；没有核心错误时返回 [`FAILURE`]。
pub fn code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<StegoError>())
        .map_or(FAILURE, |err| match err {
            StegoError::CapacityExceeded { .. } => CAPACITY_EXCEEDED,
            StegoError::CorruptFrame(_) => CORRUPT_FRAME,
            StegoError::PayloadTooLarge { .. } => PAYLOAD_TOO_LARGE,
            StegoError::ChannelSelection { .. } => USAGE,
            StegoError::InvalidBuffer { .. } | StegoError::UnsupportedChannels { .. } => {
                DATA_INVALID
            }
            StegoError::TruncatedInput { .. } => INTERNAL,
        })
}
