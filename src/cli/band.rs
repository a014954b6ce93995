//! # band 子命令 CLI 定义
//!
//! 单组势垒参数的能带计算与绘图（对应一次直接调用）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `ParamArgs`, `GridArgs` 也被 `cli/eval.rs`, `cli/scan.rs` 复用
//! - 参数传递给 `commands/band.rs`

use crate::models::PhysicalParameters;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 势垒参数（默认值与滑块默认值一致）
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Barrier height V0 in eV
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    pub v0: f64,

    /// Distance between barriers (well width) a, in Å
    #[arg(short = 'a', long = "well", default_value_t = 2.5, allow_negative_numbers = true)]
    pub well: f64,

    /// Barrier width b, in Å
    #[arg(short = 'b', long = "barrier", default_value_t = 2.5, allow_negative_numbers = true)]
    pub barrier: f64,
}

impl ParamArgs {
    pub fn to_params(&self) -> PhysicalParameters {
        PhysicalParameters::new(self.well, self.barrier, self.v0)
    }
}

/// 能量网格参数
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Energy range in eV (e.g., "0.1-30")
    #[arg(long, default_value = "0.1-30")]
    pub energy_range: String,

    /// Number of energy samples
    #[arg(long, env = "KPBAND_POINTS", default_value_t = 5000)]
    pub points: usize,
}

/// 能带输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BandOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (energy, k+, k-)
    Csv,
    /// XY data file (tab separated, NaN in gaps)
    Xy,
}

impl BandOutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            BandOutputFormat::Png => "png",
            BandOutputFormat::Svg => "svg",
            BandOutputFormat::Csv => "csv",
            BandOutputFormat::Xy => "xy",
        }
    }
}

/// band 子命令参数
#[derive(Args, Debug)]
pub struct BandArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Output file path
    #[arg(short, long, default_value = "kp_bands.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<BandOutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: parameter summary)
    #[arg(long)]
    pub title: Option<String>,

    /// Do not print the allowed-band table
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}
