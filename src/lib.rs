//! # lsb_frame 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位流、帧编解码、容量校验、编码器与解码器，
//! 以及命令行所需的图像读写和处理函数。
//!
//! 帧布局为 `[32 位大端长度][负载字节]`，每个选中通道的最低有效位承载一位。
//! 隐藏与恢复必须使用相同的每像素通道数，且结果必须以无损格式保存。

// 声明库包含的所有模块。

pub mod bitstream;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod exit;
pub mod frame;
pub mod handler;
pub mod image_io;
pub mod logging;
pub mod pixels;

pub use decoder::decode;
pub use encoder::{embed, encode};
pub use error::{CorruptFrame, StegoError};
pub use pixels::PixelBuffer;
