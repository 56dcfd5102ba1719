//! # cbs 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/cbs.rs` 定义的参数
//! - 使用 `energetics/cbs.rs`

use crate::cli::cbs::CbsArgs;
use crate::utils::output;
use eads_toolkit::energetics::{CbsExtrapolation, TwoPointEnergies};
use eads_toolkit::error::Result;

/// 执行 cbs 命令
pub fn execute(args: CbsArgs) -> Result<()> {
    output::print_header(&format!(
        "CBS Extrapolation ({} {}/{})",
        args.family, args.x, args.y
    ));

    let result = CbsExtrapolation::new(args.family, args.x, args.y)
        .convert_hartree(args.convert_hartree)
        .shift(args.shift)
        .extrapolate(&TwoPointEnergies {
            hf_x: args.hf_x,
            corr_x: args.corr_x,
            hf_y: args.hf_y,
            corr_y: args.corr_y,
        })?;

    let unit = if args.convert_hartree { "eV" } else { "Eh" };
    output::print_value("HF", result.hf, unit);
    output::print_value("Correlation", result.corr, unit);
    output::print_value("Total", result.total, unit);
    println!();
    output::print_done(&result.to_string());

    Ok(())
}
