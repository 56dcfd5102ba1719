//! # scan 命令实现
//!
//! 扫描目录树中每个计算的主输出文件，并行提取同一个量。
//!
//! ## 功能
//! - 按格式约定文件名（或自定义模式）收集报告
//! - rayon 并行提取
//! - 终端表格与 CSV 输出
//!
//! ## 依赖关系
//! - 使用 `cli/energy.rs` 定义的 ScanArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::energy::ScanArgs;
use crate::utils::{output, progress};
use eads_toolkit::batch::{BatchRunner, FileCollector, ProcessResult};
use eads_toolkit::error::{EadsError, Result};
use eads_toolkit::models::{EnergyRecord, QuantitySpec};
use eads_toolkit::parsers;

use std::path::Path;
use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct ScanRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Structure")]
    structure: String,
    #[tabled(rename = "Energy")]
    energy: String,
    #[tabled(rename = "ΔE")]
    delta: String,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning Calculations");

    if !args.dir.exists() {
        return Err(EadsError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    // 组合不合法时在扫描前报错
    QuantitySpec::lookup(args.code, args.quantity)?;

    let pattern = match (&args.pattern, args.code.report_filename()) {
        (Some(p), _) => p.clone(),
        (None, Some(name)) => name.to_string(),
        (None, None) => {
            return Err(EadsError::InvalidArgument(format!(
                "'{}' has no default output file name, pass --pattern",
                args.code
            )))
        }
    };

    let files = FileCollector::new(args.dir.clone())
        .with_pattern(&pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(EadsError::NoFilesFound { pattern });
    }

    output::print_info(&format!(
        "Found {} '{}' files, extracting {} {}",
        files.len(),
        pattern,
        args.code,
        args.quantity
    ));

    let runner = BatchRunner::new(args.jobs);
    let pb = progress::create_progress_bar(files.len() as u64, "Extracting");

    let batch = runner.run(&files, &pb, |path| scan_report(path, &args))?;

    for (path, err) in &batch.failures {
        output::print_warning(&format!("{}: {}", path, err));
    }

    let mut records = batch.outputs;
    records.sort_by(|a, b| match (a.energy, b.energy) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.structure.cmp(&b.structure),
    });

    let missing = records.iter().filter(|r| r.energy.is_none()).count();
    if missing > 0 {
        output::print_warning(&format!("{} reports do not contain {}", missing, args.quantity));
    }

    let reference = records.iter().find_map(|r| r.energy);
    print_table(&records, reference, args.top_n, args.code.energy_unit());

    if let Some(ref csv_path) = args.output_csv {
        save_records_csv(&records, csv_path)?;
        output::print_success(&format!("All records saved to '{}'", csv_path.display()));
    }

    if batch.skipped > 0 {
        output::print_warning(&format!("{} empty reports skipped", batch.skipped));
    }

    output::print_done(&format!(
        "{} extracted, {} skipped, {} failed",
        records.len() - missing,
        batch.skipped,
        batch.failures.len()
    ));

    Ok(())
}

/// 提取单个报告；空文件（计算尚未写出任何内容）跳过
fn scan_report(path: &Path, args: &ScanArgs) -> ProcessResult<EnergyRecord> {
    let display = path.display().to_string();

    match std::fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => return ProcessResult::Skipped(display),
        Ok(_) => {}
        Err(e) => return ProcessResult::Failed(display, e.to_string()),
    }

    match parsers::try_find_energy(path, args.code, args.quantity) {
        Ok(energy) => ProcessResult::Success(EnergyRecord::new(
            structure_name(path, &args.dir),
            args.code,
            args.quantity,
            energy,
            display,
        )),
        Err(e) => ProcessResult::Failed(display, e.to_string()),
    }
}

/// 报告相对扫描根目录的所在目录名
fn structure_name(path: &Path, root: &Path) -> String {
    let parent = path.parent().unwrap_or(path);
    match parent.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => parent
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

/// 打印前 N 条记录
fn print_table(records: &[EnergyRecord], reference: Option<f64>, top_n: usize, unit: &str) {
    let rows: Vec<ScanRow> = records
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(i, r)| ScanRow {
            rank: i + 1,
            structure: r.structure.clone(),
            energy: r
                .energy
                .map(|e| format!("{:.9} {}", e, unit))
                .unwrap_or_else(|| "-".to_string()),
            delta: reference
                .and_then(|e0| r.relative_to(e0))
                .map(|d| format!("{:.9}", d))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    println!("{}", Table::new(&rows));
}

/// 保存记录到 CSV
fn save_records_csv(records: &[EnergyRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for r in records {
        wtr.serialize(r)?;
    }

    wtr.flush().map_err(|e| EadsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
