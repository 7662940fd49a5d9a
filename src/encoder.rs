//! # 编码器
//!
//! 把帧的每一位依次写入选中通道的最低有效位。帧之后的通道保持原样。

use crate::capacity::validate;
use crate::error::Result;
use crate::frame::{encode_frame, frame_bits};
use crate::pixels::PixelBuffer;

/// 在原缓冲区上写入 `payload`。
///
/// 容量校验先于任何修改，所以返回错误时 `buffer` 没有被改动。
///
/// # Errors
///
/// 原样传播 [`validate`] 与 [`encode_frame`] 的错误。
pub fn embed(buffer: &mut PixelBuffer, payload: &[u8], channels_used: usize) -> Result<()> {
    validate(buffer, payload, channels_used)?;
    let bits = encode_frame(payload)?;

    log::debug!(
        "embedding {} frame bits into {} pixels ({} channels each)",
        frame_bits(payload.len()),
        buffer.num_pixels(),
        channels_used
    );

    // zip 在帧结束时停止，剩余通道不会被访问。
    buffer
        .selected_channels_mut(channels_used)
        .zip(bits)
        .for_each(|(channel, bit)| *channel = (*channel & !1) | u8::from(bit));

    Ok(())
}

/// 消费缓冲区并返回写入了 `payload` 的缓冲区。
///
/// # Errors
///
/// 同 [`embed`]。
pub fn encode(mut buffer: PixelBuffer, payload: &[u8], channels_used: usize) -> Result<PixelBuffer> {
    embed(&mut buffer, payload, channels_used)?;
    Ok(buffer)
}
