//! # 允许带提取
//!
//! 从扫描结果中找出连续有解的能量区间（允许带），用于终端汇总和帧清单。
//! 只依赖有解/无解的二值判断，不引入额外的能隙分类。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs`, `commands/scan.rs` 调用
//! - 使用 `models/curve.rs`

use crate::models::{AllowedBand, BandCurve};

/// 按能量顺序返回所有允许带
pub fn allowed_bands(curve: &BandCurve) -> Vec<AllowedBand> {
    let mut bands = Vec::new();
    let mut start: Option<usize> = None;

    for (i, k) in curve.positive.iter().enumerate() {
        match (k.is_some(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                bands.push(make_band(curve, bands.len() + 1, s, i - 1));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        bands.push(make_band(curve, bands.len() + 1, s, curve.len() - 1));
    }

    bands
}

fn make_band(curve: &BandCurve, index: usize, first: usize, last: usize) -> AllowedBand {
    AllowedBand {
        index,
        e_min: curve.energies[first],
        e_max: curve.energies[last],
        samples: last - first + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnergyGrid, PhysicalParameters};
    use crate::physics::sweep::sweep;

    #[test]
    fn test_bands_of_toy_curve() {
        let curve = BandCurve::new(
            PhysicalParameters::default(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![Some(0.1), Some(0.2), None, None, Some(1.0), Some(2.0)],
        );
        let bands = allowed_bands(&curve);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].index, 1);
        assert_eq!((bands[0].e_min, bands[0].e_max), (1.0, 2.0));
        assert_eq!(bands[0].samples, 2);
        assert_eq!((bands[1].e_min, bands[1].e_max), (5.0, 6.0));
        assert_eq!(bands[1].width(), 1.0);
    }

    #[test]
    fn test_no_bands() {
        let curve = BandCurve::new(PhysicalParameters::default(), vec![1.0, 2.0], vec![None, None]);
        assert!(allowed_bands(&curve).is_empty());
    }

    #[test]
    fn test_reference_band_edges() {
        let curve = sweep(PhysicalParameters::new(2.5, 2.5, 6.0), &EnergyGrid::default());
        let bands = allowed_bands(&curve);
        assert_eq!(bands.len(), 5);

        let expected_bottoms = [1.948, 6.009, 9.963, 17.242, 27.344];
        for (band, expected) in bands.iter().zip(expected_bottoms) {
            assert!(
                (band.e_min - expected).abs() < 0.02,
                "band {} starts at {}",
                band.index,
                band.e_min
            );
        }

        let total: usize = bands.iter().map(|b| b.samples).sum();
        assert_eq!(total, curve.present_count());
        // 最后一个带延伸到网格末端
        assert_eq!(bands[4].e_max, 30.0);
    }
}
