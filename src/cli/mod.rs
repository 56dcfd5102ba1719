//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `energy`: 从单个报告提取能量
//! - `adsorption`: 三结构吸附能
//! - `scan`: 批量提取目录树中的能量
//! - `thermo`: 振动热校正
//! - `cbs`: 完全基组外推
//! - `exponent`: 团簇尺寸外推指数
//! - `walltime`: MRCC 运行时间
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: energy, thermo, cbs, exponent

pub mod cbs;
pub mod energy;
pub mod exponent;
pub mod thermo;

use clap::{ArgAction, Parser, Subcommand};

/// eads - 吸附能后处理工具箱
#[derive(Parser)]
#[command(name = "eads")]
#[command(version)]
#[command(about = "Corrected adsorption energies from quantum-chemistry and DFT outputs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extract one energy from a single output file
    Energy(energy::EnergyArgs),

    /// Adsorption energy from adsorbate+slab, slab and adsorbate calculations
    Adsorption(energy::AdsorptionArgs),

    /// Extract energies from every calculation under a directory
    Scan(energy::ScanArgs),

    /// Zero-point and thermal corrections from VASP vibrational frequencies
    Thermo(thermo::ThermoArgs),

    /// Two-point complete basis set extrapolation
    Cbs(cbs::CbsArgs),

    /// Fit the cluster-size extrapolation exponent
    Exponent(exponent::ExponentArgs),

    /// Walltime of an MRCC calculation
    Walltime(energy::WalltimeArgs),
}
