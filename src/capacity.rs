//! # 容量校验
//!
//! 每个选中的通道只承载一位 (最低有效位)。
//! 校验必须在修改任何像素之前完成，编码要么全部成功，要么什么也不写。

use crate::constants::{LENGTH_PREFIX_BITS, MAX_PAYLOAD_BYTES};
use crate::error::{Result, StegoError};
use crate::frame::frame_bits;
use crate::pixels::PixelBuffer;

/// 缓冲区可承载的总位数：`像素数 * 每像素使用的通道数`。
pub fn available_bits(buffer: &PixelBuffer, channels_used: usize) -> usize {
    buffer.num_pixels().saturating_mul(channels_used)
}

/// 缓冲区能容纳的最大负载字节数，扣除长度前缀后向下取整，不足时为 0。
pub fn max_payload_bytes(buffer: &PixelBuffer, channels_used: usize) -> usize {
    available_bits(buffer, channels_used).saturating_sub(LENGTH_PREFIX_BITS) / 8
}

/// 实际可以隐藏的最大负载字节数：[`max_payload_bytes`] 再受 [`MAX_PAYLOAD_BYTES`] 限制。
///
/// 不超过此值的负载一定能通过 [`validate`]。
pub fn usable_payload_bytes(buffer: &PixelBuffer, channels_used: usize) -> usize {
    max_payload_bytes(buffer, channels_used).min(MAX_PAYLOAD_BYTES)
}

/// 确认 `payload` 可以完整写入 `buffer`。
///
/// # Errors
///
/// * [`StegoError::ChannelSelection`]：`channels_used` 超出像素的通道数。
/// * [`StegoError::PayloadTooLarge`]：负载超过长度前缀允许的上限。
/// * [`StegoError::CapacityExceeded`]：帧所需位数大于可用位数。
pub fn validate(buffer: &PixelBuffer, payload: &[u8], channels_used: usize) -> Result<()> {
    buffer.check_selection(channels_used)?;

    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(StegoError::PayloadTooLarge {
            len: payload.len(),
            max: MAX_PAYLOAD_BYTES,
        });
    }

    let required_bits = frame_bits(payload.len());
    let available_bits = available_bits(buffer, channels_used);

    if required_bits > available_bits {
        return Err(StegoError::CapacityExceeded {
            required_bits,
            available_bits,
        });
    }

    Ok(())
}
