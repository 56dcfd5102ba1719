//! # 解析器模块
//!
//! 从量子化学与周期性 DFT 程序的文本输出中读取标量和频率。
//!
//! ## 依赖关系
//! - 被 `energetics/` 和 `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: energy, vibration, walltime

pub mod energy;
pub mod vibration;
pub mod walltime;

pub use energy::{extract, find_energy, try_extract, try_find_energy};
pub use vibration::{read_vib_freq, read_vib_freq_file, VibrationalSpectrum};
pub use walltime::mrcc_walltime;
