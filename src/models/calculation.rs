//! # 能量提取结果数据模型
//!
//! 存储批量扫描时每个结构目录提取到的能量。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `models/quantity.rs`

use crate::models::quantity::{CodeFormat, Quantity};
use serde::Serialize;

/// 单个报告的能量提取记录
#[derive(Debug, Clone, Serialize)]
pub struct EnergyRecord {
    /// 结构名称（报告所在目录名）
    pub structure: String,

    /// 输出格式
    pub code: CodeFormat,

    /// 能量量类型
    pub quantity: Quantity,

    /// 能量（原始单位）；标记缺失时为 None
    pub energy: Option<f64>,

    /// 报告路径
    pub path: String,
}

impl EnergyRecord {
    pub fn new(
        structure: impl Into<String>,
        code: CodeFormat,
        quantity: Quantity,
        energy: Option<f64>,
        path: impl Into<String>,
    ) -> Self {
        EnergyRecord {
            structure: structure.into(),
            code,
            quantity,
            energy,
            path: path.into(),
        }
    }

    /// 相对参考能量的差值
    pub fn relative_to(&self, reference: f64) -> Option<f64> {
        self.energy.map(|e| e - reference)
    }
}
