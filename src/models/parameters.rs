//! # 物理参数
//!
//! Kronig-Penney 周期方势垒的三个标量参数。
//! 输入单位沿用实验习惯：长度 Å，能量 eV，换算在 `physics/dispersion.rs` 中完成。
//!
//! ## 依赖关系
//! - 被 `physics/`, `commands/` 使用
//! - 默认值来自 `models/controls.rs` 的滑块默认值

use crate::models::controls::{Control, ControlSurface};

use serde::Serialize;

/// 一组势垒参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalParameters {
    /// 势垒间距（势阱宽度，Å）
    pub a: f64,
    /// 势垒宽度（Å）
    pub b: f64,
    /// 势垒高度（eV）
    pub v0: f64,
}

impl PhysicalParameters {
    pub fn new(a: f64, b: f64, v0: f64) -> Self {
        Self { a, b, v0 }
    }

    /// 晶格周期 a + b（Å）
    pub fn period(&self) -> f64 {
        self.a + self.b
    }

    /// 返回替换单个滑块值后的参数
    pub fn with_control(mut self, control: Control, value: f64) -> Self {
        match control {
            Control::V0 => self.v0 = value,
            Control::Well => self.a = value,
            Control::Barrier => self.b = value,
        }
        self
    }

    /// 读取单个滑块对应的值
    pub fn control_value(&self, control: Control) -> f64 {
        match control {
            Control::V0 => self.v0,
            Control::Well => self.a,
            Control::Barrier => self.b,
        }
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        let surface = ControlSurface::default();
        Self {
            a: surface.a.default,
            b: surface.b.default,
            v0: surface.v0.default,
        }
    }
}

impl std::fmt::Display for PhysicalParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "V0 = {:.2} eV, a = {:.2} Å, b = {:.2} Å",
            self.v0, self.a, self.b
        )
    }
}
