//! # 统一错误处理模块
//!
//! 定义 eads-toolkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! 未找到标记行不是错误（提取器返回 0.0 或 `None`），
//! 只有格式损坏、配置错误和 I/O 失败才会走到这里。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// eads-toolkit 统一错误类型
#[derive(Error, Debug)]
pub enum EadsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Malformed report {report} at line {line}: {reason}")]
    MalformedReport {
        report: String,
        line: usize,
        reason: String,
    },

    #[error("Report is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Quantity '{quantity}' is not available for code format '{format}'")]
    UnsupportedQuantity { format: String, quantity: String },

    #[error("No CBS parameters for basis family '{family}' with zeta pair {x}/{y}")]
    UnsupportedBasis { family: String, x: u32, y: u32 },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EadsError>;
