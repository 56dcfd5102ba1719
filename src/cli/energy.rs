//! # 能量提取相关子命令 CLI 定义
//!
//! `energy`, `adsorption`, `scan`, `walltime`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/energy.rs`, `commands/adsorption.rs`, `commands/scan.rs`

use clap::Args;
use eads_toolkit::models::{CodeFormat, Quantity};
use std::path::PathBuf;

/// energy 子命令参数
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Output file to read (mrcc.out, orca.out, OUTCAR, ...)
    pub file: PathBuf,

    /// Program that wrote the output
    #[arg(long, value_enum, default_value = "mrcc")]
    pub code: CodeFormat,

    /// Quantity to extract (e.g. hf, mp2, ccsdt, lccsdt, dft, disp)
    #[arg(long, short, default_value = "ccsdt")]
    pub quantity: Quantity,

    /// Fail instead of printing 0.0 when the quantity is absent
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// adsorption 子命令参数
#[derive(Args, Debug)]
pub struct AdsorptionArgs {
    /// Directory containing the three structure subdirectories
    pub dir: PathBuf,

    /// Program that wrote the outputs
    #[arg(long, value_enum, default_value = "mrcc")]
    pub code: CodeFormat,

    /// Quantity to extract
    #[arg(long, short, default_value = "ccsdt")]
    pub quantity: Quantity,

    /// Subdirectories in order: adsorbate+slab, slab, adsorbate
    #[arg(long, value_delimiter = ',', default_value = "AD_SLAB,SLAB_CP,AD_CP")]
    pub structs: Vec<String>,

    /// Convert the result from Hartree to eV
    #[arg(long, default_value_t = false)]
    pub ev: bool,
}

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory containing one subdirectory per calculation
    pub dir: PathBuf,

    /// Program that wrote the outputs
    #[arg(long, value_enum)]
    pub code: CodeFormat,

    /// Quantity to extract
    #[arg(long, short)]
    pub quantity: Quantity,

    /// File name pattern (defaults to the program's output file name)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Recurse into nested subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of entries to print
    #[arg(long, default_value_t = 20)]
    pub top_n: usize,

    /// Write all records to this CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}

/// walltime 子命令参数
#[derive(Args, Debug)]
pub struct WalltimeArgs {
    /// MRCC output file(s)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
