//! # 能带计算模块
//!
//! Kronig-Penney 模型的能带计算与输出。
//!
//! ## 子模块
//! - `constants`: 物理常数与单位换算
//! - `dispersion`: 色散关系求值
//! - `sweep`: 能量网格扫描
//! - `bands`: 允许带提取
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 的参数、网格与曲线

pub mod bands;
pub mod constants;
pub mod dispersion;
pub mod export;
pub mod plot;
pub mod sweep;

pub use bands::allowed_bands;
pub use dispersion::{evaluate, DispersionEvaluator, Evaluation};
pub use sweep::sweep;
