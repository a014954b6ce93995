//! # 能带曲线数据模型
//!
//! `BandCurve` 保存一次扫描的全部结果：能量网格、正支 k 和镜像负支 -k。
//! 三个序列按下标对齐；无解的能量点以 `None` 保留在原位，由绘图端作为断点处理。
//!
//! ## 依赖关系
//! - 由 `physics/sweep.rs` 构造
//! - 被 `physics/bands.rs`, `physics/plot.rs`, `physics/export.rs` 使用

use crate::models::PhysicalParameters;

/// 单个采样点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSample {
    /// 波矢相位 k(a+b)，能隙内为 None
    pub k: Option<f64>,
    /// 能量（eV）
    pub energy: f64,
}

/// 允许带：一段连续有解的采样点
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedBand {
    /// 带序号（从 1 开始）
    pub index: usize,
    /// 带底能量（eV）
    pub e_min: f64,
    /// 带顶能量（eV）
    pub e_max: f64,
    /// 该带包含的采样点数
    pub samples: usize,
}

impl AllowedBand {
    /// 带宽（eV）
    pub fn width(&self) -> f64 {
        self.e_max - self.e_min
    }
}

/// 能带曲线（正负两支）
#[derive(Debug, Clone, PartialEq)]
pub struct BandCurve {
    pub params: PhysicalParameters,
    pub energies: Vec<f64>,
    pub positive: Vec<Option<f64>>,
    pub negative: Vec<Option<f64>>,
}

impl BandCurve {
    /// 由正支构造，负支逐点取反
    pub fn new(params: PhysicalParameters, energies: Vec<f64>, positive: Vec<Option<f64>>) -> Self {
        let negative = positive.iter().map(|k| k.map(|k| -k)).collect();
        Self {
            params,
            energies,
            positive,
            negative,
        }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// 正支采样点
    pub fn samples(&self) -> impl Iterator<Item = BandSample> + '_ {
        self.energies
            .iter()
            .zip(&self.positive)
            .map(|(&energy, &k)| BandSample { k, energy })
    }

    /// 有解的采样点数
    pub fn present_count(&self) -> usize {
        self.positive.iter().filter(|k| k.is_some()).count()
    }

    /// 把一支拆成连续有解的 (k, E) 折线段，跨过能隙的点不相连
    pub fn segments(branch: &[Option<f64>], energies: &[f64]) -> Vec<Vec<(f64, f64)>> {
        Self::segments_within(branch, energies, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// 同 `segments`，但能量落在 [e_min, e_max] 之外的点也视为断点
    pub fn segments_within(
        branch: &[Option<f64>],
        energies: &[f64],
        e_min: f64,
        e_max: f64,
    ) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();

        for (k, &energy) in branch.iter().zip(energies) {
            match k {
                Some(k) if energy >= e_min && energy <= e_max => current.push((*k, energy)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}
