//! # thermo 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/thermo.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 热校正模型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ThermoModel {
    /// Quasi rigid-rotor harmonic-oscillator
    #[default]
    QuasiRrho,
    /// Plain harmonic oscillator (real modes only)
    Harmonic,
}

/// thermo 子命令参数
#[derive(Args, Debug)]
pub struct ThermoArgs {
    /// VASP OUTCAR (or any file) with vibrational frequency lines
    pub file: PathBuf,

    /// Temperature in Kelvin
    #[arg(short, long, default_value_t = 298.15)]
    pub temperature: f64,

    /// Correction model
    #[arg(long, value_enum, default_value = "quasi-rrho")]
    pub model: ThermoModel,

    /// Vibrational degrees of freedom of a gas-phase molecule (3N-6 or 3N-5)
    #[arg(long)]
    pub dof: Option<usize>,
}
