//! # exponent 子命令 CLI 定义
//!
//! 吸附能可直接在命令行给出，或从含 `atoms,eads` 两列的 CSV 读取。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/exponent.rs`

use clap::Args;
use std::path::PathBuf;

/// exponent 子命令参数
#[derive(Args, Debug)]
pub struct ExponentArgs {
    /// Adsorption energies with increasing cluster size (comma separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "csv")]
    pub eads: Vec<f64>,

    /// Total atoms in each cluster (defaults to the standard series 6,22,34,...)
    #[arg(long, value_delimiter = ',', conflicts_with = "csv")]
    pub atoms: Vec<usize>,

    /// CSV file with `atoms` and `eads` columns
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
