//! # cbs 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cbs.rs`

use clap::Args;
use eads_toolkit::energetics::BasisFamily;

/// cbs 子命令参数
#[derive(Args, Debug)]
pub struct CbsArgs {
    /// HF energy in the smaller (X) basis
    #[arg(long, allow_hyphen_values = true)]
    pub hf_x: f64,

    /// Correlation energy in the smaller (X) basis
    #[arg(long, allow_hyphen_values = true)]
    pub corr_x: f64,

    /// HF energy in the larger (Y) basis
    #[arg(long, allow_hyphen_values = true)]
    pub hf_y: f64,

    /// Correlation energy in the larger (Y) basis
    #[arg(long, allow_hyphen_values = true)]
    pub corr_y: f64,

    /// Cardinal number of the X basis
    #[arg(short = 'x', long, default_value_t = 2)]
    pub x: u32,

    /// Cardinal number of the Y basis (normally X+1)
    #[arg(short = 'y', long, default_value_t = 3)]
    pub y: u32,

    /// Basis set family
    #[arg(long, value_enum, default_value = "cc")]
    pub family: BasisFamily,

    /// Convert the results from Hartree to eV
    #[arg(long, default_value_t = false)]
    pub convert_hartree: bool,

    /// Shift added to the HF and total CBS energies
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub shift: f64,
}
