//! # scan 子命令实现
//!
//! 沿一个滑块的全部位置逐帧重算能带并输出，相当于把交互界面的每次拖动
//! 落成一个文件。各帧之间没有共享状态，每帧都是完整的扫描 + 绘图。
//!
//! ## 功能
//! - 校验滑块取值范围
//! - 并行渲染（rayon），保留帧顺序
//! - 已存在的帧默认跳过
//! - 输出本次渲染的帧清单 frames.csv
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的 ScanArgs
//! - 使用 `batch/` 模块进行并行处理
//! - 使用 `physics/` 模块进行计算，`commands/band.rs` 负责写出单帧

use crate::batch::{BatchResult, BatchRunner, ProcessResult};
use crate::cli::band::BandOutputFormat;
use crate::cli::scan::ScanArgs;
use crate::error::{KpbandError, Result};
use crate::models::{Control, ControlSurface, EnergyGrid, PhysicalParameters};
use crate::physics::{self, plot};
use crate::utils::output;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 帧清单文件名
pub const MANIFEST_NAME: &str = "frames.csv";

/// 帧清单中的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub param: String,
    pub value: f64,
    pub v0: f64,
    pub a: f64,
    pub b: f64,
    pub allowed_bands: usize,
    pub file: String,
}

/// 单帧任务
#[derive(Debug, Clone)]
struct Frame {
    params: PhysicalParameters,
    value: f64,
    path: PathBuf,
}

/// 所有帧共享的只读配置
struct FrameConfig {
    control: Control,
    grid: EnergyGrid,
    format: BandOutputFormat,
    width: u32,
    height: u32,
    overwrite: bool,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Kronig-Penney Slider Scan");

    let runner = BatchRunner::new(args.jobs);
    let result = run_scan(&args, &runner)?;

    output::print_separator();
    output::print_success(&format!(
        "Scan complete: {} rendered, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    for reason in result.skips.iter().take(10) {
        output::print_skip(reason);
    }
    if result.skips.len() > 10 {
        output::print_skip(&format!("... and {} more", result.skips.len() - 10));
    }

    if !result.failures.is_empty() {
        output::print_warning("Failed frames:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 计算帧列表、并行渲染并写出清单
fn run_scan(args: &ScanArgs, runner: &BatchRunner) -> Result<BatchResult<FrameRecord>> {
    let control = Control::from(args.param);
    let surface = ControlSurface::default();
    let base = args.params.to_params();

    // 固定的两个参数同样必须是合法的滑块状态
    for held in [Control::V0, Control::Well, Control::Barrier] {
        if held != control {
            surface
                .slider(held)
                .check(held, base.control_value(held))?;
        }
    }

    let slider = surface.slider(control);
    let (lo, hi) = match &args.range {
        Some(range) => {
            let (lo, hi) = super::parse_range(range)?;
            slider.check(control, lo)?;
            slider.check(control, hi)?;
            (lo, hi)
        }
        None => (slider.min, slider.max),
    };

    let positions = slider.positions(lo, hi);
    if positions.is_empty() {
        return Err(KpbandError::InvalidArgument(format!(
            "no slider positions for {} in [{}, {}]",
            control, lo, hi
        )));
    }

    let grid = super::build_grid(&args.grid)?;

    output::print_info(&format!(
        "Scanning {} over {} positions ({:.2} - {:.2}), step {}",
        control,
        positions.len(),
        lo,
        hi,
        slider.step
    ));
    output::print_info(&format!(
        "Energy grid: {} points over {:.3} - {:.3} eV",
        grid.len(),
        grid.min(),
        grid.max()
    ));

    fs::create_dir_all(&args.output).map_err(|e| KpbandError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let frames: Vec<Frame> = positions
        .into_iter()
        .map(|value| Frame {
            params: base.with_control(control, value),
            value,
            path: args
                .output
                .join(frame_file_name(&args.stem, control, value, args.format)),
        })
        .collect();

    let config = FrameConfig {
        control,
        grid,
        format: args.format,
        width: args.width,
        height: args.height,
        overwrite: args.overwrite,
    };

    let result = runner.run(frames, |frame| render_frame(frame, &config))?;

    // 清单只记录本次渲染的帧；全部跳过时保留上一次的清单
    if !result.outputs.is_empty() {
        let manifest = args.output.join(MANIFEST_NAME);
        write_manifest(&result.outputs, &manifest)?;
        output::print_info(&format!("Frame manifest written to '{}'", manifest.display()));
    }

    Ok(result)
}

/// 渲染单帧：完整扫描 + 写出
fn render_frame(frame: &Frame, config: &FrameConfig) -> ProcessResult<FrameRecord> {
    if frame.path.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            frame.path.display()
        ));
    }

    let curve = physics::sweep(frame.params, &config.grid);
    let bands = physics::allowed_bands(&curve);
    let title = plot::default_title(&curve);

    match super::band::write_output(
        &curve,
        &frame.path,
        config.format,
        &title,
        config.width,
        config.height,
    ) {
        Ok(()) => ProcessResult::Success(FrameRecord {
            param: config.control.to_string(),
            value: frame.value,
            v0: frame.params.v0,
            a: frame.params.a,
            b: frame.params.b,
            allowed_bands: bands.len(),
            file: frame
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        }),
        Err(e) => ProcessResult::Failed(frame.path.display().to_string(), e.to_string()),
    }
}

/// 帧文件名，数值补零便于按名称排序
fn frame_file_name(stem: &str, control: Control, value: f64, format: BandOutputFormat) -> String {
    format!("{}_{}_{:05.2}.{}", stem, control, value, format.extension())
}

/// 写出帧清单
fn write_manifest(records: &[FrameRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(|e| KpbandError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
