//! # 能带扫描
//!
//! 在固定势垒参数下，对能量网格逐点调用 `DispersionEvaluator`，
//! 得到与网格下标对齐的正支 k 序列，负支由 `BandCurve::new` 镜像生成。
//!
//! 扫描在调用线程上顺序执行，无共享可变状态；每次调用都完整重算，不做缓存。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs`, `commands/scan.rs` 调用
//! - 使用 `physics/dispersion.rs`
//! - 产出 `models/curve.rs` 的 BandCurve

use crate::models::{BandCurve, EnergyGrid, PhysicalParameters};
use crate::physics::dispersion::DispersionEvaluator;

/// 对给定参数扫描整个能量网格
pub fn sweep(params: PhysicalParameters, grid: &EnergyGrid) -> BandCurve {
    let evaluator = DispersionEvaluator::new(params);

    let positive: Vec<Option<f64>> = grid
        .energies()
        .iter()
        .map(|&energy| evaluator.evaluate(energy))
        .collect();

    BandCurve::new(params, grid.energies().to_vec(), positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_curve() -> BandCurve {
        sweep(PhysicalParameters::new(2.5, 2.5, 6.0), &EnergyGrid::default())
    }

    #[test]
    fn test_sweep_lengths_and_mixture() {
        let curve = reference_curve();
        assert_eq!(curve.len(), 5000);
        assert_eq!(curve.positive.len(), 5000);
        assert_eq!(curve.negative.len(), 5000);
        assert!(curve.positive.iter().any(|k| k.is_some()));
        assert!(curve.positive.iter().any(|k| k.is_none()));
    }

    #[test]
    fn test_sweep_present_count() {
        let curve = reference_curve();
        let present = curve.present_count();
        // 边界点附近的舍入可能让个别点翻转
        assert!((3610..=3620).contains(&present), "present = {}", present);
    }

    #[test]
    fn test_negative_branch_is_exact_negation() {
        let curve = reference_curve();
        for (p, n) in curve.positive.iter().zip(&curve.negative) {
            match (p, n) {
                (Some(p), Some(n)) => assert_eq!(p.to_bits(), (-n).to_bits()),
                (None, None) => {}
                _ => panic!("absence mismatch between branches"),
            }
        }
    }

    #[test]
    fn test_sweep_matches_pointwise_evaluate() {
        let grid = EnergyGrid::linspace(0.5, 12.0, 200).unwrap();
        let params = PhysicalParameters::new(1.5, 0.8, 4.0);
        let curve = sweep(params, &grid);
        let evaluator = DispersionEvaluator::new(params);
        for (energy, k) in curve.energies.iter().zip(&curve.positive) {
            assert_eq!(*k, evaluator.evaluate(*energy));
        }
        assert_eq!(curve.energies, grid.energies());
    }

    #[test]
    fn test_sweep_deterministic() {
        assert_eq!(reference_curve(), reference_curve());
    }

    #[test]
    fn test_degenerate_grid_point_is_gap() {
        let grid = EnergyGrid::linspace(5.0, 7.0, 3).unwrap();
        let curve = sweep(PhysicalParameters::new(2.5, 2.5, 6.0), &grid);
        assert_eq!(curve.energies[1], 6.0);
        assert_eq!(curve.positive[1], None);
        assert_eq!(curve.negative[1], None);
    }
}
