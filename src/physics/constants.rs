//! # 物理常数 (CODATA 2018)
//!
//! 单位统一为 SI；输入侧的 eV 和 Å 在计算前换算。

/// 电子质量 (kg)
pub const ELECTRON_MASS: f64 = 9.1093837015e-31;
//                          +/- 0.0000000028e-31

/// 约化普朗克常数 (J s)
pub const HBAR: f64 = 1.054571817e-34;
//                 +/- 0 (exact)

/// 元电荷 (C)，同时是 1 eV 对应的焦耳数
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;
//                              +/- 0 (exact)

/// 1 Å 对应的米数
pub const ANGSTROM: f64 = 1e-10;

/// eV → J
pub fn ev_to_joule(energy_ev: f64) -> f64 {
    energy_ev * ELEMENTARY_CHARGE
}

/// Å → m
pub fn angstrom_to_meter(length: f64) -> f64 {
    length * ANGSTROM
}
