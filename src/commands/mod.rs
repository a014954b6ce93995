//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `physics/`, `utils/`
//! - 子模块: band, eval, scan

pub mod band;
pub mod eval;
pub mod scan;

use crate::cli::band::GridArgs;
use crate::cli::Commands;
use crate::error::{KpbandError, Result};
use crate::models::EnergyGrid;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Band(args) => band::execute(args),
        Commands::Eval(args) => eval::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 解析 "min-max" 形式的区间
pub(crate) fn parse_range(range: &str) -> Result<(f64, f64)> {
    let (lo, hi) = range
        .split_once('-')
        .ok_or_else(|| KpbandError::InvalidRange(range.to_string()))?;

    let min: f64 = lo
        .trim()
        .parse()
        .map_err(|_| KpbandError::InvalidRange(range.to_string()))?;
    let max: f64 = hi
        .trim()
        .parse()
        .map_err(|_| KpbandError::InvalidRange(range.to_string()))?;

    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(KpbandError::InvalidRange(format!(
            "{} (must be min <= max)",
            range
        )));
    }

    Ok((min, max))
}

/// 由命令行参数构造能量网格
pub(crate) fn build_grid(args: &GridArgs) -> Result<EnergyGrid> {
    let (e_min, e_max) = parse_range(&args.energy_range)?;
    EnergyGrid::linspace(e_min, e_max, args.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0.1-30").unwrap(), (0.1, 30.0));
        assert_eq!(parse_range(" 2 - 8 ").unwrap(), (2.0, 8.0));
        assert_eq!(parse_range("3-3").unwrap(), (3.0, 3.0));
    }

    #[test]
    fn test_parse_range_invalid() {
        assert!(matches!(parse_range("30"), Err(KpbandError::InvalidRange(_))));
        assert!(matches!(parse_range("a-b"), Err(KpbandError::InvalidRange(_))));
        assert!(matches!(parse_range("10-1"), Err(KpbandError::InvalidRange(_))));
    }

    #[test]
    fn test_build_grid() {
        let args = GridArgs {
            energy_range: "1-2".to_string(),
            points: 11,
        };
        let grid = build_grid(&args).unwrap();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid.max(), 2.0);

        let empty = GridArgs {
            energy_range: "1-2".to_string(),
            points: 0,
        };
        assert!(build_grid(&empty).is_err());
    }
}
