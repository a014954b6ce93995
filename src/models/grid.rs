//! # 能量网格
//!
//! 闭区间 [min, max] 上等间距的能量采样点（eV）。
//! 构造后不可变；首点为 min，末点严格等于 max。
//!
//! ## 依赖关系
//! - 被 `physics/sweep.rs`, `commands/` 使用

use crate::error::{KpbandError, Result};

/// 默认能量下限（eV）
pub const DEFAULT_MIN_ENERGY: f64 = 0.1;
/// 默认能量上限（eV）
pub const DEFAULT_MAX_ENERGY: f64 = 30.0;
/// 默认采样点数
pub const DEFAULT_POINTS: usize = 5000;

/// 等间距能量网格
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    energies: Vec<f64>,
}

impl EnergyGrid {
    /// 在 [min, max] 上取 n 个等间距点
    pub fn linspace(min: f64, max: f64, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(KpbandError::InvalidArgument(
                "energy grid needs at least one point".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(KpbandError::InvalidArgument(format!(
                "invalid energy interval [{}, {}]",
                min, max
            )));
        }

        Ok(Self {
            energies: evenly_spaced(min, max, n),
        })
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.energies[0]
    }

    pub fn max(&self) -> f64 {
        self.energies[self.energies.len() - 1]
    }
}

impl Default for EnergyGrid {
    fn default() -> Self {
        Self {
            energies: evenly_spaced(DEFAULT_MIN_ENERGY, DEFAULT_MAX_ENERGY, DEFAULT_POINTS),
        }
    }
}

/// numpy.linspace 语义：n >= 1，末点取精确值避免累积误差
fn evenly_spaced(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![min];
    }

    let step = (max - min) / (n - 1) as f64;
    let mut energies: Vec<f64> = (0..n).map(|i| min + i as f64 * step).collect();
    energies[n - 1] = max;
    energies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = EnergyGrid::default();
        assert_eq!(grid.len(), 5000);
        assert_eq!(grid.min(), 0.1);
        assert_eq!(grid.max(), 30.0);
        assert_eq!(grid, EnergyGrid::linspace(0.1, 30.0, 5000).unwrap());
    }

    #[test]
    fn test_even_spacing() {
        let grid = EnergyGrid::linspace(0.0, 1.0, 11).unwrap();
        for w in grid.energies().windows(2) {
            assert!((w[1] - w[0] - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_point() {
        let grid = EnergyGrid::linspace(2.0, 5.0, 1).unwrap();
        assert_eq!(grid.energies(), &[2.0]);
    }

    #[test]
    fn test_invalid_grid() {
        assert!(EnergyGrid::linspace(0.1, 30.0, 0).is_err());
        assert!(EnergyGrid::linspace(30.0, 0.1, 10).is_err());
        assert!(EnergyGrid::linspace(f64::NAN, 1.0, 10).is_err());
    }
}
