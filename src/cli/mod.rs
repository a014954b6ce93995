//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `band`: 计算并绘制单组参数的能带图
//! - `eval`: 在指定能量点求色散关系
//! - `scan`: 沿某个滑块逐帧重算，输出一组图像
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: band, eval, scan

pub mod band;
pub mod eval;
pub mod scan;

use clap::{Parser, Subcommand};

/// kpband - Kronig-Penney 能带结构工具
#[derive(Parser)]
#[command(name = "kpband")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Kronig-Penney band structure evaluation and plotting", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute and plot the band structure for one set of barrier parameters
    Band(band::BandArgs),

    /// Evaluate the dispersion relation at specific energies
    Eval(eval::EvalArgs),

    /// Re-render the band structure at every position of one parameter slider
    Scan(scan::ScanArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_band_defaults() {
        let cli = Cli::try_parse_from(["kpband", "band"]).unwrap();
        match cli.command {
            Commands::Band(args) => {
                assert_eq!(args.params.v0, 6.0);
                assert_eq!(args.params.well, 2.5);
                assert_eq!(args.params.barrier, 2.5);
                assert_eq!(args.grid.energy_range, "0.1-30");
                assert_eq!(args.format, None);
            }
            _ => panic!("expected band subcommand"),
        }
    }

    #[test]
    fn test_parse_eval_energies() {
        let cli =
            Cli::try_parse_from(["kpband", "eval", "--v0", "4", "-a", "1.5", "2.0", "8.5"]).unwrap();
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.energies, vec![2.0, 8.5]);
                assert_eq!(args.params.v0, 4.0);
                assert_eq!(args.params.well, 1.5);
            }
            _ => panic!("expected eval subcommand"),
        }
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from(["kpband", "scan", "--param", "a", "--range", "1-2", "-j", "2"])
            .unwrap();
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.param, scan::ScanParam::A);
                assert_eq!(args.range.as_deref(), Some("1-2"));
                assert_eq!(args.jobs, 2);
            }
            _ => panic!("expected scan subcommand"),
        }
    }
}
