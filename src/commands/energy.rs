//! # energy / walltime 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/energy.rs` 定义的参数
//! - 使用 `parsers/energy.rs`, `parsers/walltime.rs`
//! - 使用 `utils/output.rs`

use crate::cli::energy::{EnergyArgs, WalltimeArgs};
use crate::utils::output;
use eads_toolkit::error::{EadsError, Result};
use eads_toolkit::parsers;

/// 执行 energy 命令
pub fn execute(args: EnergyArgs) -> Result<()> {
    let energy = parsers::try_find_energy(&args.file, args.code, args.quantity)?;
    let unit = args.code.energy_unit();

    match energy {
        Some(e) => {
            output::print_success(&format!(
                "{} {} from '{}'",
                args.code,
                args.quantity,
                args.file.display()
            ));
            output::print_value(args.quantity.name(), e, unit);
        }
        None if args.strict => {
            return Err(EadsError::ParseError {
                format: args.code.to_string(),
                path: args.file.display().to_string(),
                reason: format!("'{}' not found", args.quantity),
            });
        }
        None => {
            output::print_warning(&format!(
                "'{}' not found in '{}', reporting 0.0",
                args.quantity,
                args.file.display()
            ));
            output::print_value(args.quantity.name(), 0.0, unit);
        }
    }

    Ok(())
}

/// 执行 walltime 命令
pub fn execute_walltime(args: WalltimeArgs) -> Result<()> {
    output::print_header("MRCC Walltime");

    let mut total = 0.0;
    for file in &args.files {
        let seconds = parsers::mrcc_walltime(file)?;
        total += seconds;
        output::print_value(&file.display().to_string(), seconds, "s");
    }

    if args.files.len() > 1 {
        output::print_value("total", total, "s");
    }
    output::print_done(&format!("{:.2} h", total / 3600.0));

    Ok(())
}
