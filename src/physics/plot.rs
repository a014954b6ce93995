//! # 能带图生成
//!
//! 使用 `plotters` 绘制 E-k 能带图。
//!
//! ## 功能
//! - 固定坐标范围：k(a+b) ∈ [−π, π]，E ∈ [0, 30] eV
//! - 正负两支分别绘制，能隙处断开（不跨越无解点连线）
//! - 超出能量轴范围的采样点不绘制
//! - 图例标注势垒高度 V0
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/band.rs`, `commands/scan.rs` 调用
//! - 使用 `models/curve.rs` 的 BandCurve
//! - 使用 `plotters` 渲染图表

use crate::error::{KpbandError, Result};
use crate::models::BandCurve;

use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

/// 能量轴上限（eV）
pub const ENERGY_AXIS_MAX: f64 = 30.0;

/// 图像尺寸与标题
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

/// 生成能带图
pub fn generate_band_plot(curve: &BandCurve, output_path: &Path, options: &PlotOptions) -> Result<()> {
    let size = (options.width, options.height);
    if options.use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_band_chart(&root, curve, &options.title, output_path)?;
        root.present().map_err(|e| plot_error(output_path, e))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_band_chart(&root, curve, &options.title, output_path)?;
        root.present().map_err(|e| plot_error(output_path, e))?;
    }
    Ok(())
}

/// 默认标题
pub fn default_title(curve: &BandCurve) -> String {
    format!("Kronig-Penney Band Structure ({})", curve.params)
}

/// 绘制能带图的核心逻辑
fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &BandCurve,
    title: &str,
    path: &Path,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(|e| plot_error(path, e))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-PI..PI, 0.0..ENERGY_AXIS_MAX)
        .map_err(|e| plot_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("Wavevector k(a+b)")
        .y_desc("Energy (eV)")
        .x_label_formatter(&|x| format!("{:.2}", x))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| plot_error(path, e))?;

    let line_color = RGBColor(0, 102, 204);
    for (i, segment) in plot_segments(curve).into_iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(segment, line_color.stroke_width(2)))
            .map_err(|e| plot_error(path, e))?;
        if i == 0 {
            series.label("Allowed band").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });
        }
    }

    // 势垒高度参考线，数值标注放进图例，避免压在能带曲线上
    let v0 = curve.params.v0;
    if (0.0..=ENERGY_AXIS_MAX).contains(&v0) {
        let guide = RGBColor(160, 160, 160);
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(-PI, v0), (PI, v0)],
                guide.stroke_width(1),
            )))
            .map_err(|e| plot_error(path, e))?
            .label(format!("V0 = {:.1} eV", v0))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], guide.stroke_width(1)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font(("sans-serif", 13))
        .draw()
        .map_err(|e| plot_error(path, e))?;

    let period_text = format!("a + b = {:.2} Å", curve.params.period());
    chart
        .draw_series(std::iter::once(Text::new(
            period_text,
            (-PI + 0.15, ENERGY_AXIS_MAX - 1.2),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| plot_error(path, e))?;

    Ok(())
}

/// 两支的绘图折线段；坐标轴范围外的点按断点处理，不会被压到边框上
pub fn plot_segments(curve: &BandCurve) -> Vec<Vec<(f64, f64)>> {
    [&curve.positive, &curve.negative]
        .into_iter()
        .flat_map(|branch| {
            BandCurve::segments_within(branch, &curve.energies, 0.0, ENERGY_AXIS_MAX)
        })
        .collect()
}

fn plot_error<E: std::fmt::Debug>(path: &Path, e: E) -> KpbandError {
    KpbandError::PlotError {
        path: path.display().to_string(),
        reason: format!("{:?}", e),
    }
}
