//! # 位流
//!
//! 字节与位之间的转换，每个字节内按 MSB 优先。编码器与解码器共用。

use crate::error::{Result, StegoError};

/// 把字节序列惰性展开为位序列 (MSB 优先)。
pub fn to_bits<I>(bytes: I) -> impl Iterator<Item = bool>
where
    I: IntoIterator<Item = u8>,
{
    bytes
        .into_iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
}

/// 从位序列中重建恰好 `byte_count` 个字节。
///
/// 只消费 `byte_count * 8` 个位，多余的位保持不动，因此可以配合 `by_ref()` 连续读取。
///
/// # Errors
///
/// 如果提供的位少于 `byte_count * 8`，返回 [`StegoError::TruncatedInput`]。
pub fn from_bits<I>(bits: I, byte_count: usize) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = bool>,
{
    let expected_bits = byte_count.saturating_mul(8);
    let mut bits = bits.into_iter();
    let mut bytes = Vec::with_capacity(byte_count);
    let mut consumed = 0;

    for _ in 0..byte_count {
        let mut byte = 0u8;
        for _ in 0..8 {
            let bit = bits.next().ok_or(StegoError::TruncatedInput {
                expected_bits,
                actual_bits: consumed,
            })?;
            byte = (byte << 1) | u8::from(bit);
            consumed += 1;
        }
        bytes.push(byte);
    }

    Ok(bytes)
}
