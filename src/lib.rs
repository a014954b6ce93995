//! # kpband - Kronig-Penney 能带结构工具
//!
//! 求解一维周期方势垒（Kronig-Penney 模型）的色散关系，
//! 扫描能量网格得到 E-k 能带，并输出图像或数据。
//!
//! ## 子命令
//! - `band` - 单组参数的能带图与允许带表格
//! - `eval` - 指定能量点的迹与波矢
//! - `scan` - 沿滑块逐帧重算能带
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── physics/ (色散求值、扫描、绘图、导出)
//!   │     ├── batch/   (并行逐帧渲染)
//!   │     └── models/  (参数、网格、曲线、滑块)
//!   ├── utils/      (终端输出、进度条)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod physics;
pub mod utils;

pub use error::{KpbandError, Result};
pub use models::{BandCurve, EnergyGrid, PhysicalParameters};
pub use physics::{evaluate, sweep, DispersionEvaluator};
