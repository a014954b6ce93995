//! # Kronig-Penney 色散关系求值
//!
//! 对给定能量 E，计算周期方势垒的迹
//!
//! ```text
//! T(E) = cos(αa)·cosh(βb) + (β² − α²)/(2αβ) · sin(αa)·sinh(βb)
//! α = sqrt(2mE/ħ²),  β = sqrt(2m(V0 − E)/ħ²)
//! ```
//!
//! |T| < 1 时存在实的 Bloch 解，k(a+b) = Re(arccos T) ∈ [0, π]；否则落在能隙内。
//!
//! ## 算法说明
//! α、β 全部用复数开方。E > V0 时 β 变为纯虚数，cosh/sinh 自动变成 cos/sin，
//! 因此经典允许区和禁戒区不需要按判别式符号分支。
//! E == V0 时 β = 0，上式分母为零，直接视为无解。
//!
//! ## 依赖关系
//! - 被 `physics/sweep.rs`, `commands/eval.rs` 调用
//! - 使用 `physics/constants.rs`
//! - 使用 `num-complex` 进行复数运算

use crate::models::PhysicalParameters;
use crate::physics::constants::{angstrom_to_meter, ev_to_joule, ELECTRON_MASS, HBAR};

use num_complex::Complex64;

/// 单个能量点的求值结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// 能量（eV）
    pub energy: f64,
    /// 色散关系左端的迹；E == V0 时为 None
    pub trace: Option<Complex64>,
    /// 波矢相位；能隙内为 None
    pub k: Option<f64>,
}

/// 色散关系求值器
#[derive(Debug, Clone, Copy)]
pub struct DispersionEvaluator {
    params: PhysicalParameters,
}

impl DispersionEvaluator {
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// 计算迹 T(E)；E == V0 时返回 None
    pub fn trace(&self, energy: f64) -> Option<Complex64> {
        if energy == self.params.v0 {
            return None;
        }

        let e = ev_to_joule(energy);
        let v0 = ev_to_joule(self.params.v0);
        let a = angstrom_to_meter(self.params.a);
        let b = angstrom_to_meter(self.params.b);

        let alpha = wavenumber(e);
        let beta = wavenumber(v0 - e);

        let alpha_a = alpha * a;
        let beta_b = beta * b;
        let coupling = (beta * beta - alpha * alpha) / (alpha * beta * 2.0);

        Some(alpha_a.cos() * beta_b.cosh() + coupling * alpha_a.sin() * beta_b.sinh())
    }

    /// 求波矢相位 k(a+b)；能隙或退化点返回 None
    pub fn evaluate(&self, energy: f64) -> Option<f64> {
        self.trace(energy).and_then(phase_from_trace)
    }

    /// 同时返回迹和 k，供终端表格使用
    pub fn evaluate_detailed(&self, energy: f64) -> Evaluation {
        let trace = self.trace(energy);
        Evaluation {
            energy,
            trace,
            k: trace.and_then(phase_from_trace),
        }
    }
}

/// 直接调用形式：`evaluate(a, b, energy, v0)`
pub fn evaluate(a: f64, b: f64, energy: f64, v0: f64) -> Option<f64> {
    DispersionEvaluator::new(PhysicalParameters::new(a, b, v0)).evaluate(energy)
}

/// sqrt(2m·E/ħ²)，E 以焦耳计，可以为负
fn wavenumber(energy_joule: f64) -> Complex64 {
    Complex64::new(2.0 * ELECTRON_MASS * energy_joule / (HBAR * HBAR), 0.0).sqrt()
}

/// |T| < 1 时取 Re(arccos T)；虚部在构造上只剩舍入误差，直接丢弃
fn phase_from_trace(trace: Complex64) -> Option<f64> {
    // NaN 的模长比较结果为 false，非有限的迹同样落入能隙分支
    if trace.norm() < 1.0 {
        Some(trace.acos().re)
    } else {
        None
    }
}
