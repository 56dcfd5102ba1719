//! # 批量处理模块
//!
//! 对目录树中大量相互独立的报告文件做并行提取。
//!
//! ## 功能
//! - 按格式约定文件名收集报告
//! - 并行处理
//! - 进度反馈与失败汇总
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
