//! # 解码器
//!
//! 以与编码器相同的顺序读取通道的最低有效位，先读长度，再读负载。缓冲区只读。

use crate::constants::MAX_PAYLOAD_BYTES;
use crate::error::Result;
use crate::frame::decode_frame;
use crate::pixels::PixelBuffer;

/// 从 `buffer` 中恢复负载。
///
/// # Errors
///
/// * [`StegoError::ChannelSelection`](crate::error::StegoError::ChannelSelection)：通道数不合法。
/// * [`StegoError::CorruptFrame`](crate::error::StegoError::CorruptFrame)：长度前缀不合理，
///   或者像素在读完 `32 + n * 8` 位之前耗尽。通常说明图像未经本工具隐写，或参数不一致。
pub fn decode(buffer: &PixelBuffer, channels_used: usize) -> Result<Vec<u8>> {
    buffer.check_selection(channels_used)?;

    let mut bits = buffer
        .selected_channels(channels_used)
        .map(|channel| channel & 1 == 1);

    let payload = decode_frame(&mut bits, MAX_PAYLOAD_BYTES)?;
    log::debug!("recovered {} payload bytes", payload.len());

    Ok(payload)
}
