//! # 文本报告数据模型
//!
//! `EnergyReport` 持有一次性读入内存的输出文件全部行，读入后不可变。
//!
//! ## 依赖关系
//! - 被 `parsers/` 使用
//! - 使用 `error.rs`

use crate::error::{EadsError, Result};
use std::fs;
use std::path::Path;

/// 报告的字节解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportEncoding {
    /// 严格 UTF-8，非法字节报错
    Utf8,
    /// ISO-8859-1，每个字节映射为一个字符，永不失败
    Latin1,
}

impl ReportEncoding {
    /// 解码字节流
    pub fn decode(self, bytes: Vec<u8>, path: &str) -> Result<String> {
        match self {
            ReportEncoding::Utf8 => String::from_utf8(bytes).map_err(|_| {
                EadsError::InvalidEncoding {
                    path: path.to_string(),
                }
            }),
            ReportEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// 已读入的文本报告
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReport {
    /// 报告名称（通常为文件路径）
    name: String,
    /// 按顺序的全部文本行
    lines: Vec<String>,
}

impl EnergyReport {
    /// 从字符串内容构造报告
    pub fn from_content(name: impl Into<String>, content: &str) -> Self {
        EnergyReport {
            name: name.into(),
            lines: content.lines().map(|l| l.to_string()).collect(),
        }
    }

    /// 一次性读入文件并按指定方式解码
    pub fn from_file(path: &Path, encoding: ReportEncoding) -> Result<Self> {
        let display = path.display().to_string();

        if !path.is_file() {
            return Err(EadsError::FileNotFound { path: display });
        }

        let bytes = fs::read(path).map_err(|e| EadsError::FileReadError {
            path: display.clone(),
            source: e,
        })?;
        let content = encoding.decode(bytes, &display)?;

        Ok(Self::from_content(display, &content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_latin1_never_fails() {
        let bytes = vec![b'E', b'=', 0xE9, 0xFF, b'\n', b'1'];
        let text = ReportEncoding::Latin1.decode(bytes, "x").unwrap();
        assert_eq!(text.chars().count(), 6);
        assert!(text.contains('é'));
    }

    #[test]
    fn test_utf8_rejects_invalid_bytes() {
        let err = ReportEncoding::Utf8.decode(vec![0xFF, 0xFE], "bad.out").unwrap_err();
        assert!(matches!(err, EadsError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_from_file_reads_all_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("OUTCAR");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"first line\n\xB0 degree\nlast line\n").unwrap();

        let report = EnergyReport::from_file(&path, ReportEncoding::Latin1).unwrap();
        assert_eq!(report.len(), 3);
        assert_eq!(report.lines()[2], "last line");
        assert!(report.name().ends_with("OUTCAR"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = EnergyReport::from_file(&dir.path().join("nope"), ReportEncoding::Utf8)
            .unwrap_err();
        assert!(matches!(err, EadsError::FileNotFound { .. }));
    }
}
