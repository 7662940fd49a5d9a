//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::capacity::{available_bits, usable_payload_bytes};
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, RECOVERED_PREFIX};
use crate::decoder::decode;
use crate::encoder::encode;
use crate::image_io;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和负载、调用隐写核心函数写入带长度前缀的帧，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`，或目标格式不是无损格式。
/// * 无法读取输入的图像或负载文件。
/// * 图像没有足够的空间来隐藏负载 (此时不会写出任何文件)。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = match args.dest {
        Some(dest) => dest,
        None => sibling_path(&args.image, DOCTORED_PREFIX, "png"),
    };
    ensure_writable(&dest, args.force)?;
    image_io::ensure_lossless(&dest)?;

    let payload = match (&args.text, args.message) {
        (Some(path), _) => fs::read(path).with_context(|| {
            format!(
                "Unable to read payload file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, Some(message)) => message.into_bytes(),
        (None, None) => anyhow::bail!("Nothing to hide: pass a payload file or a message."),
    };

    let picture = image_io::load(&args.image)?;

    let picture = encode(picture, &payload, args.channels).with_context(|| {
        format!(
            "Not enough space or invalid settings to hide {} bytes in {}",
            payload.len().to_string().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    image_io::save(&picture, &dest)?;

    log::info!(
        "hid {} bytes in {} using {} channels per pixel",
        payload.len(),
        dest.display(),
        args.channels
    );
    println!(
        "The data has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用解码核心函数按长度前缀恢复负载，
/// 最后将恢复的数据写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像中没有可识别的帧 (未经隐写、参数不一致或已损坏)。
/// * 无法写入到目标文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let output = match args.text {
        Some(output) => output,
        None => sibling_path(&args.image, RECOVERED_PREFIX, "bin"),
    };
    ensure_writable(&output, args.force)?;

    let picture = image_io::load(&args.image)?;

    let payload = decode(&picture, args.channels).with_context(|| {
        format!(
            "Failed to recover hidden data from '{}'. \nThe image may not contain a hidden message, was saved lossily, or was hidden with a different channel count.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&output, &payload).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    log::info!("recovered {} bytes into {}", payload.len(), output.display());
    println!(
        "The data has been successfully recovered and saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑：报告可用位数与最大负载字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = image_io::load(&args.image)?;
    picture.check_selection(args.channels)?;

    println!(
        "{}: {}x{} pixels, {} channels each",
        args.image.to_string_lossy().bold(),
        picture.width(),
        picture.height(),
        picture.channels()
    );
    println!(
        "Available bits: {}, maximum payload: {} bytes",
        available_bits(&picture, args.channels).to_string().green().bold(),
        usable_payload_bytes(&picture, args.channels)
            .to_string()
            .green()
            .bold()
    );

    Ok(())
}

/// 在 `image` 所在目录生成 `<prefix><文件名主干>.<extension>`。
fn sibling_path(image: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    image.with_file_name(format!("{prefix}{stem}.{extension}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
