//! # eval 子命令 CLI 定义
//!
//! 在若干能量点上求色散关系，打印迹和波矢。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/eval.rs`

use super::band::ParamArgs;
use clap::Args;

/// eval 子命令参数
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Energies to evaluate, in eV
    #[arg(required = true, allow_negative_numbers = true)]
    pub energies: Vec<f64>,
}
