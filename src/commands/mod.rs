//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `utils/` 和库中的 `parsers/`, `energetics/`, `batch/`
//! - 子模块: energy, adsorption, scan, thermo, cbs, exponent

pub mod adsorption;
pub mod cbs;
pub mod energy;
pub mod exponent;
pub mod scan;
pub mod thermo;

use crate::cli::Commands;
use eads_toolkit::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Energy(args) => energy::execute(args),
        Commands::Adsorption(args) => adsorption::execute(args),
        Commands::Scan(args) => scan::execute(args),
        Commands::Thermo(args) => thermo::execute(args),
        Commands::Cbs(args) => cbs::execute(args),
        Commands::Exponent(args) => exponent::execute(args),
        Commands::Walltime(args) => energy::execute_walltime(args),
    }
}
