//! # 帧编解码
//!
//! 写入图像的数据布局：
//!
//! ```text
//! [32 bits] 负载字节数 (大端 u32)
//! [N bytes] 负载原始字节
//! ```
//!
//! 解码器只依靠长度前缀判断何时停止，因此不需要任何结束标记。
//! 本模块只定义位的排列，不关心这些位写在哪些像素里。

use crate::bitstream::{from_bits, to_bits};
use crate::constants::{LENGTH_PREFIX_BITS, MAX_PAYLOAD_BYTES};
use crate::error::{CorruptFrame, Result, StegoError};

const LENGTH_PREFIX_BYTES: usize = LENGTH_PREFIX_BITS / 8;

/// 承载 `payload_len` 字节负载的帧所需的总位数。
pub fn frame_bits(payload_len: usize) -> usize {
    payload_len
        .saturating_mul(8)
        .saturating_add(LENGTH_PREFIX_BITS)
}

/// 将负载编码为帧的位序列：长度前缀后接负载本身。
///
/// # Errors
///
/// 负载超过 [`MAX_PAYLOAD_BYTES`] 时返回 [`StegoError::PayloadTooLarge`]，
/// 这样长度前缀总是与负载长度一致，且解码端一定会接受它。
pub fn encode_frame(payload: &[u8]) -> Result<impl Iterator<Item = bool> + '_> {
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(StegoError::PayloadTooLarge {
            len: payload.len(),
            max: MAX_PAYLOAD_BYTES,
        });
    }
    let len = u32::try_from(payload.len()).map_err(|_| StegoError::PayloadTooLarge {
        len: payload.len(),
        max: MAX_PAYLOAD_BYTES,
    })?;

    Ok(to_bits(
        len.to_be_bytes().into_iter().chain(payload.iter().copied()),
    ))
}

/// 从位源中读取一个帧并返回负载。
///
/// 先读 32 位长度 `n`，再读恰好 `n * 8` 位；位源中剩余的位不会被消费。
///
/// # Errors
///
/// * `n` 超过 `max_payload_bytes` 时返回 [`CorruptFrame::ImplausibleLength`]。
/// * 位源在读完之前耗尽时返回 [`CorruptFrame::Exhausted`]。
pub fn decode_frame<I>(bits: &mut I, max_payload_bytes: usize) -> Result<Vec<u8>>
where
    I: Iterator<Item = bool>,
{
    let prefix = from_bits(&mut *bits, LENGTH_PREFIX_BYTES).map_err(|err| exhausted(err, 0))?;
    let declared = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;

    if declared > max_payload_bytes {
        return Err(CorruptFrame::ImplausibleLength {
            declared,
            max: max_payload_bytes,
        }
        .into());
    }

    log::debug!("frame declares a payload of {declared} bytes");

    from_bits(&mut *bits, declared).map_err(|err| exhausted(err, LENGTH_PREFIX_BITS))
}

/// 位源提前耗尽在帧层面意味着帧损坏，而不是内部错误。
fn exhausted(err: StegoError, already_read: usize) -> StegoError {
    match err {
        StegoError::TruncatedInput {
            expected_bits,
            actual_bits,
        } => CorruptFrame::Exhausted {
            required_bits: already_read + expected_bits,
            available_bits: already_read + actual_bits,
        }
        .into(),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_starts_with_big_endian_length() {
        let bits: Vec<bool> = encode_frame(&[0x41, 0x42]).unwrap().collect();
        assert_eq!(bits.len(), frame_bits(2));

        let prefix = from_bits(bits[..32].iter().copied(), 4).unwrap();
        assert_eq!(prefix, vec![0, 0, 0, 2]);

        let body = from_bits(bits[32..].iter().copied(), 2).unwrap();
        assert_eq!(body, b"AB".to_vec());
    }

    #[test]
    fn empty_payload_is_just_the_prefix() {
        let bits: Vec<bool> = encode_frame(&[]).unwrap().collect();
        assert_eq!(bits, vec![false; LENGTH_PREFIX_BITS]);

        let mut source = bits.into_iter();
        assert_eq!(decode_frame(&mut source, MAX_PAYLOAD_BYTES).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_stops_after_declared_length() {
        let payload = b"framed".to_vec();
        let mut source = encode_frame(&payload)
            .unwrap()
            .chain(std::iter::repeat(true).take(40));

        assert_eq!(decode_frame(&mut source, MAX_PAYLOAD_BYTES).unwrap(), payload);
        assert_eq!(source.count(), 40);
    }

    #[test]
    fn implausible_length_is_corrupt() {
        let mut source = std::iter::repeat(true);
        let err = decode_frame(&mut source, MAX_PAYLOAD_BYTES).unwrap_err();
        assert_eq!(
            err,
            StegoError::CorruptFrame(CorruptFrame::ImplausibleLength {
                declared: u32::MAX as usize,
                max: MAX_PAYLOAD_BYTES,
            })
        );
    }

    #[test]
    fn short_source_is_corrupt() {
        // 声明 3 字节，但只提供 1 字节。
        let mut source = to_bits([0, 0, 0, 3, 0xFF]);
        let err = decode_frame(&mut source, MAX_PAYLOAD_BYTES).unwrap_err();
        assert_eq!(
            err,
            StegoError::CorruptFrame(CorruptFrame::Exhausted {
                required_bits: 56,
                available_bits: 40,
            })
        );
    }

    #[test]
    fn missing_prefix_is_corrupt() {
        let mut source = std::iter::repeat(false).take(10);
        let err = decode_frame(&mut source, MAX_PAYLOAD_BYTES).unwrap_err();
        assert_eq!(
            err,
            StegoError::CorruptFrame(CorruptFrame::Exhausted {
                required_bits: 32,
                available_bits: 10,
            })
        );
    }

    #[test]
    fn oversized_payload_is_rejected_on_encode() {
        let payload = vec![0u8; MAX_PAYLOAD_BYTES + 1];
        assert!(matches!(
            encode_frame(&payload),
            Err(StegoError::PayloadTooLarge { len, max })
                if len == MAX_PAYLOAD_BYTES + 1 && max == MAX_PAYLOAD_BYTES
        ));
    }
}
