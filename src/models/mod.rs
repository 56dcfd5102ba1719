//! # 数据模型模块
//!
//! 定义报告、输出格式/能量量查找表和提取结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `energetics/` 和 `commands/` 使用
//! - 子模块: report, quantity, calculation

pub mod calculation;
pub mod quantity;
pub mod report;

pub use calculation::EnergyRecord;
pub use quantity::{CodeFormat, MatchPolicy, Quantity, QuantitySpec};
pub use report::{EnergyReport, ReportEncoding};
