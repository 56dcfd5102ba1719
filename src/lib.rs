//! # eads-toolkit - 吸附能后处理工具箱
//!
//! 从 MRCC、ORCA、VASP、Quantum ESPRESSO、CC4S 和 DFT-D3 的输出中提取能量，
//! 并做热化学校正、完全基组外推和团簇尺寸外推，得到校正后的吸附能。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── parsers/     (能量、频率、运行时间解析)
//!   │     └── models/    (报告、格式/量查找表)
//!   ├── energetics/  (热校正、CBS、团簇外推、吸附能)
//!   ├── batch/       (批量并行提取)
//!   └── error.rs     (错误处理)
//! ```

pub mod batch;
pub mod energetics;
pub mod error;
pub mod models;
pub mod parsers;

pub use error::{EadsError, Result};
