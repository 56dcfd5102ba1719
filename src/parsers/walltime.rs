//! # MRCC 运行时间解析器
//!
//! MRCC 在输出开头和结尾各打印一行时间戳横幅：
//! ```text
//!  ************************ 2023-04-01 10:00:00 *************************
//! ```
//! 运行时间为第一个与最后一个时间戳之差。
//!
//! ## 依赖关系
//! - 被 `commands/walltime.rs` 使用
//! - 使用 `regex`, `chrono`

use crate::error::{EadsError, Result};
use crate::models::{EnergyReport, ReportEncoding};
use chrono::NaiveDateTime;
use regex::Regex;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 计算报告首尾时间戳之间的秒数
pub fn walltime_seconds(report: &EnergyReport) -> Result<f64> {
    let re = Regex::new(r"(\d{4}-\d{2}-\d{2})\s+(\d{2}:\d{2}:\d{2})")
        .map_err(|e| EadsError::Other(e.to_string()))?;

    let stamps: Vec<NaiveDateTime> = report
        .lines()
        .iter()
        .filter_map(|line| re.captures(line))
        .filter_map(|caps| {
            let text = format!("{} {}", &caps[1], &caps[2]);
            NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).ok()
        })
        .collect();

    let (start, end) = match (stamps.first(), stamps.last()) {
        (Some(s), Some(e)) => (*s, *e),
        _ => {
            return Err(EadsError::ParseError {
                format: "mrcc".to_string(),
                path: report.name().to_string(),
                reason: "No timestamp found".to_string(),
            })
        }
    };

    Ok((end - start).num_seconds() as f64)
}

/// 读取 mrcc.out 并计算运行时间（秒）
pub fn mrcc_walltime(path: &Path) -> Result<f64> {
    let report = EnergyReport::from_file(path, ReportEncoding::Utf8)?;
    walltime_seconds(&report)
}
