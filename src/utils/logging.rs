//! # 日志初始化
//!
//! 核心库通过 `log` 门面输出诊断信息（如非相邻 zeta、缺失的吸附能分量），
//! 由 `env_logger` 输出到 stderr。`RUST_LOG` 优先于命令行 `-v`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 使用 `log`, `env_logger`

use env_logger::Env;

/// 根据 `-v` 次数确定默认日志级别
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// 初始化全局日志
pub fn init(verbose: u8) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
