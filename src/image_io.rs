//! # 图像读写
//!
//! 在图像文件与 [`PixelBuffer`] 之间转换。隐写数据依赖像素值被精确保存，
//! 因此只允许写出无损格式；有损格式 (如 JPEG) 会悄无声息地破坏隐藏的数据。

use crate::pixels::PixelBuffer;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, ExtendedColorType, ImageFormat};
use std::path::Path;

/// 可以安全保存隐写结果的无损格式。
const LOSSLESS_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Qoi,
];

/// 读取图像并转换为 8 位 RGB 或 RGBA 像素缓冲区。
///
/// # Errors
///
/// 无法打开或解码图像时返回错误。
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let (width, height, channels, samples) = match image {
        DynamicImage::ImageRgb8(buf) => (buf.width(), buf.height(), 3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (buf.width(), buf.height(), 4, buf.into_raw()),
        other if other.color().has_alpha() => {
            let buf = other.to_rgba8();
            (buf.width(), buf.height(), 4, buf.into_raw())
        }
        other => {
            let buf = other.to_rgb8();
            (buf.width(), buf.height(), 3, buf.into_raw())
        }
    };

    log::debug!(
        "loaded {}: {width}x{height}, {channels} channels",
        path.display()
    );

    Ok(PixelBuffer::new(width, height, channels, samples)?)
}

/// 将像素缓冲区写入 `path`，格式由扩展名决定。
///
/// # Errors
///
/// 扩展名不是受支持的无损格式，或写入失败时返回错误。
pub fn save(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_lossless(path)?;

    let color = match buffer.channels() {
        4 => ExtendedColorType::Rgba8,
        3 => ExtendedColorType::Rgb8,
        2 => ExtendedColorType::La8,
        _ => ExtendedColorType::L8,
    };

    image::save_buffer(
        path,
        buffer.samples(),
        buffer.width(),
        buffer.height(),
        color,
    )
    .with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 确认 `path` 的扩展名对应一种无损格式。
pub fn ensure_lossless(path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unsupported output image format: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        LOSSLESS_FORMATS.contains(&format),
        "Output format {:?} is lossy and would destroy the hidden data. \nUse PNG, BMP, TIFF, WebP or QOI instead: {}",
        format,
        path.to_string_lossy().red().bold()
    );

    Ok(())
}
