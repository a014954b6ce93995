//! # 能带数据导出
//!
//! 导出扫描结果到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: `energy_ev,k_positive,k_negative`，能隙内留空
//! - XY: `#` 注释头 + 制表符分隔三列，能隙内写 `NaN`
//!
//! ## 依赖关系
//! - 被 `commands/band.rs`, `commands/scan.rs` 调用
//! - 使用 `models/curve.rs` 的 BandCurve
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{KpbandError, Result};
use crate::models::BandCurve;

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct BandRow {
    energy_ev: f64,
    k_positive: Option<f64>,
    k_negative: Option<f64>,
}

/// 导出为 CSV 格式
pub fn to_csv(curve: &BandCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for ((energy, k_pos), k_neg) in curve.energies.iter().zip(&curve.positive).zip(&curve.negative) {
        wtr.serialize(BandRow {
            energy_ev: *energy,
            k_positive: *k_pos,
            k_negative: *k_neg,
        })?;
    }

    wtr.flush().map_err(|e| KpbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(curve: &BandCurve, output_path: &Path) -> Result<()> {
    let io_err = |e: std::io::Error| KpbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Kronig-Penney band structure").map_err(io_err)?;
    writeln!(out, "# {}", curve.params).map_err(io_err)?;
    writeln!(out, "# Columns: energy (eV), k+ (rad), k- (rad); NaN marks a forbidden gap")
        .map_err(io_err)?;
    writeln!(out, "#").map_err(io_err)?;

    for ((energy, k_pos), k_neg) in curve.energies.iter().zip(&curve.positive).zip(&curve.negative) {
        writeln!(
            out,
            "{:.6}\t{}\t{}",
            energy,
            format_xy_value(*k_pos),
            format_xy_value(*k_neg)
        )
        .map_err(io_err)?;
    }

    out.flush().map_err(io_err)?;
    Ok(())
}

fn format_xy_value(k: Option<f64>) -> String {
    match k {
        Some(k) => format!("{:.8}", k),
        None => "NaN".to_string(),
    }
}
