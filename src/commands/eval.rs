//! # eval 子命令实现
//!
//! 在指定能量点上求色散关系，逐点打印迹 T(E)、|T| 与 k(a+b)。
//!
//! ## 依赖关系
//! - 使用 `cli/eval.rs` 定义的 EvalArgs
//! - 使用 `physics/dispersion.rs`

use crate::cli::eval::EvalArgs;
use crate::error::Result;
use crate::physics::{DispersionEvaluator, Evaluation};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 结果行
#[derive(Debug, Clone, Tabled)]
struct EvalRow {
    #[tabled(rename = "E (eV)")]
    energy: String,
    #[tabled(rename = "Re T")]
    trace: String,
    #[tabled(rename = "|T|")]
    magnitude: String,
    #[tabled(rename = "k(a+b)")]
    k: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行 eval 命令
pub fn execute(args: EvalArgs) -> Result<()> {
    output::print_header("Dispersion Relation");

    let params = args.params.to_params();
    output::print_info(&format!("Parameters: {}", params));

    let evaluator = DispersionEvaluator::new(params);
    let rows: Vec<EvalRow> = args
        .energies
        .iter()
        .map(|&energy| to_row(&evaluator.evaluate_detailed(energy)))
        .collect();

    println!("{}", Table::new(&rows));

    let allowed = rows.iter().filter(|r| r.status == "band").count();
    output::print_success(&format!(
        "{} of {} energies lie in allowed bands",
        allowed,
        rows.len()
    ));

    Ok(())
}

fn to_row(eval: &Evaluation) -> EvalRow {
    let (trace, magnitude) = match eval.trace {
        Some(t) => (format!("{:.6}", t.re), format!("{:.6}", t.norm())),
        None => ("-".to_string(), "-".to_string()),
    };
    let status = match (eval.trace, eval.k) {
        (None, _) => "degenerate (E = V0)",
        (Some(_), Some(_)) => "band",
        (Some(_), None) => "gap",
    };

    EvalRow {
        energy: format!("{:.4}", eval.energy),
        trace,
        magnitude,
        k: eval.k.map(|k| format!("{:.6}", k)).unwrap_or_else(|| "-".to_string()),
        status: status.to_string(),
    }
}
