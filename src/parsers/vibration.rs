//! # 振动频率解析器
//!
//! 从 VASP 振动分析输出 (OUTCAR) 中读取实频和虚频。
//!
//! ## 频率行格式
//! ```text
//!    1 f  =   10.012345 THz    62.908213 2PiTHz  333.970000 cm-1    41.406540 meV
//!    9 f/i=    1.234567 THz     7.756941 2PiTHz   41.180000 cm-1     5.105762 meV
//! ```
//! 含 `THz` 字段的行是频率行，含 `f/i=` 字段的是虚频。
//! 数值取倒数第二个字段（meV）。
//!
//! ## 依赖关系
//! - 被 `commands/thermo.rs` 使用
//! - 使用 `models/report.rs`

use crate::error::{EadsError, Result};
use crate::models::{EnergyReport, ReportEncoding};
use std::path::Path;

/// 振动谱：实频与虚频，按出现顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VibrationalSpectrum {
    pub real: Vec<f64>,
    pub imaginary: Vec<f64>,
}

impl VibrationalSpectrum {
    /// 模式总数
    pub fn mode_count(&self) -> usize {
        self.real.len() + self.imaginary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mode_count() == 0
    }
}

/// 解析振动频率行
pub fn read_vib_freq<S: AsRef<str>>(lines: &[S]) -> Result<VibrationalSpectrum> {
    let mut spectrum = VibrationalSpectrum::default();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let data: Vec<&str> = line.split_whitespace().collect();

        if !data.contains(&"THz") {
            continue;
        }

        let value = data
            .len()
            .checked_sub(2)
            .and_then(|idx| data[idx].parse::<f64>().ok())
            .ok_or_else(|| EadsError::MalformedReport {
                report: "vibrational spectrum".to_string(),
                line: i + 1,
                reason: format!("no frequency value in '{}'", line.trim()),
            })?;

        if data.contains(&"f/i=") {
            spectrum.imaginary.push(value);
        } else {
            spectrum.real.push(value);
        }
    }

    Ok(spectrum)
}

/// 读取文件中的振动频率
pub fn read_vib_freq_file(path: &Path) -> Result<VibrationalSpectrum> {
    let report = EnergyReport::from_file(path, ReportEncoding::Latin1)?;
    read_vib_freq(report.lines()).map_err(|e| match e {
        EadsError::MalformedReport { line, reason, .. } => EadsError::MalformedReport {
            report: report.name().to_string(),
            line,
            reason,
        },
        other => other,
    })
}
