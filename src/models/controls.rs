//! # 交互控制面
//!
//! 三个参数滑块的边界、步长与默认值。`scan` 子命令按滑块位置逐帧重算，
//! 每帧都是一次完整、独立的计算。
//!
//! ## 依赖关系
//! - 被 `models/parameters.rs`, `commands/scan.rs`, `cli/scan.rs` 使用
//! - 无外部模块依赖

use crate::error::{KpbandError, Result};

/// 滑块位置比较时允许的浮点误差
const SLIDER_EPS: f64 = 1e-9;

/// 可调参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// 势垒高度 V0
    V0,
    /// 势垒间距 a
    Well,
    /// 势垒宽度 b
    Barrier,
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::V0 => write!(f, "v0"),
            Control::Well => write!(f, "a"),
            Control::Barrier => write!(f, "b"),
        }
    }
}

/// 单个滑块
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Slider {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// 值是否落在滑块范围内
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min - SLIDER_EPS && value <= self.max + SLIDER_EPS
    }

    /// 校验值是否可由该滑块给出
    pub fn check(&self, control: Control, value: f64) -> Result<()> {
        if !value.is_finite() || !self.contains(value) {
            return Err(KpbandError::InvalidArgument(format!(
                "{} = {} is outside the slider range [{}, {}]",
                control, value, self.min, self.max
            )));
        }
        Ok(())
    }

    /// [lo, hi] 内的所有滑块位置（按步长对齐到滑块最小值）
    pub fn positions(&self, lo: f64, hi: f64) -> Vec<f64> {
        let first = ((lo - self.min) / self.step - SLIDER_EPS).ceil() as i64;
        let last = ((hi - self.min) / self.step + SLIDER_EPS).floor() as i64;

        (first.max(0)..=last)
            .map(|i| self.min + i as f64 * self.step)
            .filter(|v| self.contains(*v))
            .collect()
    }
}

/// 三个滑块组成的控制面
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSurface {
    pub v0: Slider,
    pub a: Slider,
    pub b: Slider,
}

impl ControlSurface {
    pub fn slider(&self, control: Control) -> &Slider {
        match control {
            Control::V0 => &self.v0,
            Control::Well => &self.a,
            Control::Barrier => &self.b,
        }
    }
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self {
            v0: Slider::new(0.0, 10.0, 0.1, 6.0),
            a: Slider::new(0.0, 5.0, 0.1, 2.5),
            b: Slider::new(0.0, 5.0, 0.1, 2.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface() {
        let s = ControlSurface::default();
        assert_eq!(s.slider(Control::V0).default, 6.0);
        assert_eq!(s.slider(Control::Well).max, 5.0);
        assert_eq!(s.slider(Control::Barrier).step, 0.1);
    }

    #[test]
    fn test_positions_full_range() {
        let s = ControlSurface::default();
        let v0 = s.v0.positions(s.v0.min, s.v0.max);
        assert_eq!(v0.len(), 101);
        assert_eq!(v0[0], 0.0);
        assert!((v0[100] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_positions_subrange() {
        let s = ControlSurface::default();
        let a = s.a.positions(1.0, 2.0);
        assert_eq!(a.len(), 11);
        assert!((a[0] - 1.0).abs() < 1e-9);
        assert!((a[10] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_positions_clamped_to_slider() {
        let s = ControlSurface::default();
        let b = s.b.positions(4.5, 9.0);
        assert_eq!(b.len(), 6);
        assert!(b.iter().all(|v| s.b.contains(*v)));
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        let s = ControlSurface::default();
        assert!(s.v0.check(Control::V0, 6.0).is_ok());
        assert!(s.v0.check(Control::V0, 10.5).is_err());
        assert!(s.a.check(Control::Well, -0.1).is_err());
        assert!(s.b.check(Control::Barrier, f64::NAN).is_err());
    }
}
