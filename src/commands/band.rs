//! # band 子命令实现
//!
//! 对一组势垒参数做完整扫描，输出能带图或数据文件，并打印允许带表格。
//!
//! ## 依赖关系
//! - 使用 `cli/band.rs` 定义的 BandArgs
//! - 使用 `physics/` 模块进行计算和输出
//! - 使用 `utils/output.rs` 打印状态

use crate::cli::band::{BandArgs, BandOutputFormat};
use crate::error::Result;
use crate::models::{AllowedBand, BandCurve};
use crate::physics::{self, export, plot};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 执行 band 命令
pub fn execute(args: BandArgs) -> Result<()> {
    output::print_header("Kronig-Penney Band Structure");

    let params = args.params.to_params();
    let grid = super::build_grid(&args.grid)?;

    output::print_info(&format!("Parameters: {}", params));
    output::print_info(&format!(
        "Energy grid: {} points over {:.3} - {:.3} eV",
        grid.len(),
        grid.min(),
        grid.max()
    ));

    let curve = physics::sweep(params, &grid);
    let bands = physics::allowed_bands(&curve);

    output::print_success(&format!(
        "{} of {} samples lie in allowed bands ({} bands)",
        curve.present_count(),
        curve.len(),
        bands.len()
    ));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| plot::default_title(&curve));

    write_output(&curve, &args.output, format, &title, args.width, args.height)?;
    output::print_success(&format!("Band structure saved to '{}'", args.output.display()));

    if !args.no_table {
        print_band_table(&bands);
    }

    Ok(())
}

/// 按格式写出一条能带曲线
pub(crate) fn write_output(
    curve: &BandCurve,
    output: &Path,
    format: BandOutputFormat,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    match format {
        BandOutputFormat::Png | BandOutputFormat::Svg => {
            let options = plot::PlotOptions {
                title: title.to_string(),
                width,
                height,
                use_svg: format == BandOutputFormat::Svg,
            };
            plot::generate_band_plot(curve, output, &options)
        }
        BandOutputFormat::Csv => export::to_csv(curve, output),
        BandOutputFormat::Xy => export::to_xy(curve, output),
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> BandOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => BandOutputFormat::Svg,
        Some("csv") => BandOutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => BandOutputFormat::Xy,
        _ => BandOutputFormat::Png,
    }
}

/// 打印允许带表格
fn print_band_table(bands: &[AllowedBand]) {
    #[derive(Tabled)]
    struct BandRow {
        #[tabled(rename = "Band")]
        index: usize,
        #[tabled(rename = "E_min (eV)")]
        e_min: String,
        #[tabled(rename = "E_max (eV)")]
        e_max: String,
        #[tabled(rename = "Width (eV)")]
        width: String,
    }

    if bands.is_empty() {
        output::print_warning("No allowed bands in the energy range");
        return;
    }

    let rows: Vec<BandRow> = bands
        .iter()
        .map(|b| BandRow {
            index: b.index,
            e_min: format!("{:.3}", b.e_min),
            e_max: format!("{:.3}", b.e_max),
            width: format!("{:.3}", b.width()),
        })
        .collect();

    output::print_header(&format!("{} Allowed Bands", rows.len()));
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::band::{GridArgs, ParamArgs};

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("x.svg")), BandOutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("x.CSV")), BandOutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("x.dat")), BandOutputFormat::Xy);
        assert_eq!(guess_format_from_extension(Path::new("x.png")), BandOutputFormat::Png);
        assert_eq!(guess_format_from_extension(Path::new("noext")), BandOutputFormat::Png);
    }

    #[test]
    fn test_execute_writes_csv() {
        let output = std::env::temp_dir().join(format!("kpband_band_{}.csv", std::process::id()));
        let args = BandArgs {
            params: ParamArgs {
                v0: 6.0,
                well: 2.5,
                barrier: 2.5,
            },
            grid: GridArgs {
                energy_range: "0.1-30".to_string(),
                points: 500,
            },
            output: output.clone(),
            format: None,
            width: 800,
            height: 600,
            title: None,
            no_table: true,
        };

        execute(args).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 501);
        std::fs::remove_file(&output).ok();
    }
}
