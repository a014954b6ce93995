//! # 数据模型模块
//!
//! 定义势垒参数、能量网格、能带曲线和交互控制面。
//!
//! ## 依赖关系
//! - 被 `physics/` 和 `commands/` 使用
//! - 子模块: parameters, grid, curve, controls

pub mod controls;
pub mod curve;
pub mod grid;
pub mod parameters;

pub use controls::{Control, ControlSurface, Slider};
pub use curve::{AllowedBand, BandCurve, BandSample};
pub use grid::EnergyGrid;
pub use parameters::PhysicalParameters;
