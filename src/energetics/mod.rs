//! # 能量学计算模块
//!
//! 在提取到的原始能量之上做物理校正与外推。
//!
//! ## 功能
//! - `thermo`: ZPE、谐振子与 quasi-RRHO 热校正
//! - `cbs`: 完全基组两点外推
//! - `cluster`: 团簇尺寸外推指数拟合
//! - `adsorption`: 三结构吸附能组装
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/energy.rs`

pub mod adsorption;
pub mod cbs;
pub mod cluster;
pub mod constants;
pub mod thermo;

pub use adsorption::{adsorption_energy, AdsorptionEnergy, DEFAULT_STRUCTS};
pub use cbs::{get_cbs, BasisFamily, CbsExtrapolation, CbsResult, TwoPointEnergies};
pub use cluster::{find_exponent, fit_exponent, ExponentFit, DEFAULT_CLUSTER_SIZES};
pub use thermo::{
    quasi_rrho, quasi_rrho_gas, vibrational_energy_contribution, zpe_correction,
    ThermoCorrection,
};
