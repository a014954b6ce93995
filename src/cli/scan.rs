//! # scan 子命令 CLI 定义
//!
//! 模拟滑块拖动：沿一个参数的滑块位置逐帧完整重算并输出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/band.rs` 的 ParamArgs, GridArgs, BandOutputFormat
//! - 参数传递给 `commands/scan.rs`

use super::band::{BandOutputFormat, GridArgs, ParamArgs};
use crate::models::Control;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 被扫描的滑块
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ScanParam {
    /// Barrier height V0
    V0,
    /// Distance between barriers a
    A,
    /// Barrier width b
    B,
}

impl From<ScanParam> for Control {
    fn from(param: ScanParam) -> Self {
        match param {
            ScanParam::V0 => Control::V0,
            ScanParam::A => Control::Well,
            ScanParam::B => Control::Barrier,
        }
    }
}

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Slider to move; the other two stay at --v0/--well/--barrier
    #[arg(long, value_enum, default_value = "v0")]
    pub param: ScanParam,

    /// Sub-range of the slider to scan (e.g., "2-8"); default is the full slider
    #[arg(short, long)]
    pub range: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Output directory for the frames
    #[arg(short, long, default_value = "kp_frames")]
    pub output: PathBuf,

    /// Frame format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: BandOutputFormat,

    /// File name prefix for each frame
    #[arg(long, default_value = "band")]
    pub stem: String,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing frames
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
