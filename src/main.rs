//! # eads - 吸附能后处理命令行工具
//!
//! 计算核心位于库 (`eads_toolkit`)，这里只负责参数解析、日志和终端输出。
//!
//! ## 子命令
//! - `energy`     - 从单个报告提取能量
//! - `adsorption` - 三结构吸附能
//! - `scan`       - 批量提取
//! - `thermo`     - ZPE 与热校正
//! - `cbs`        - 完全基组外推
//! - `exponent`   - 团簇尺寸外推指数
//! - `walltime`   - MRCC 运行时间
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── eads_toolkit (解析、能量学计算、批量处理)
//!   └── utils/      (输出、进度条、日志)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
