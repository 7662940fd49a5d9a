//! # 像素缓冲区
//!
//! 按像素交错存放的通道样本 (例如 RGBRGB... 或 RGBARGBA...)。
//! 编码器与解码器都通过 [`PixelBuffer::selected_channels`] 以同一顺序遍历通道：
//! 像素序号递增，像素内通道序号递增，只取每个像素的前 `channels_used` 个通道。

use crate::constants::MAX_CHANNELS_PER_PIXEL;
use crate::error::{Result, StegoError};

/// 一幅图像的像素数据，由当前持有者独占。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// 用交错排列的样本创建缓冲区。
    ///
    /// # Errors
    ///
    /// * `channels` 不在 `1..=4` 范围内时，返回 [`StegoError::UnsupportedChannels`]。
    /// * `samples` 的长度不等于 `width * height * channels` 时，返回 [`StegoError::InvalidBuffer`]。
    pub fn new(width: u32, height: u32, channels: usize, samples: Vec<u8>) -> Result<Self> {
        if !(1..=MAX_CHANNELS_PER_PIXEL).contains(&channels) {
            return Err(StegoError::UnsupportedChannels {
                channels,
                max: MAX_CHANNELS_PER_PIXEL,
            });
        }

        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(channels);

        if samples.len() != expected {
            return Err(StegoError::InvalidBuffer {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 每个像素的通道数。
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn num_pixels(&self) -> usize {
        self.samples.len() / self.channels
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// 检查每像素使用 `channels_used` 个通道是否可行。
    pub fn check_selection(&self, channels_used: usize) -> Result<()> {
        if channels_used == 0 || channels_used > self.channels {
            return Err(StegoError::ChannelSelection {
                requested: channels_used,
                available: self.channels,
            });
        }
        Ok(())
    }

    /// 按隐写顺序遍历被选中的通道。
    ///
    /// 调用者应先通过 [`check_selection`](Self::check_selection) 验证 `channels_used`。
    pub fn selected_channels(&self, channels_used: usize) -> impl Iterator<Item = &u8> {
        self.samples
            .chunks_exact(self.channels)
            .flat_map(move |pixel| pixel.iter().take(channels_used))
    }

    /// [`selected_channels`](Self::selected_channels) 的可变版本。
    pub fn selected_channels_mut(&mut self, channels_used: usize) -> impl Iterator<Item = &mut u8> {
        self.samples
            .chunks_exact_mut(self.channels)
            .flat_map(move |pixel| pixel.iter_mut().take(channels_used))
    }
}
