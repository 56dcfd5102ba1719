//! # adsorption 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/energy.rs` 定义的 AdsorptionArgs
//! - 使用 `energetics/adsorption.rs`

use crate::cli::energy::AdsorptionArgs;
use crate::utils::output;
use eads_toolkit::energetics::adsorption;
use eads_toolkit::energetics::constants::HARTREE;
use eads_toolkit::error::{EadsError, Result};

/// 执行 adsorption 命令
pub fn execute(args: AdsorptionArgs) -> Result<()> {
    output::print_header("Adsorption Energy");

    let structs: [String; 3] = args.structs.clone().try_into().map_err(|v: Vec<String>| {
        EadsError::InvalidArgument(format!(
            "Exactly three structure directories are required, got {}",
            v.len()
        ))
    })?;

    output::print_info(&format!(
        "{} {} from '{}' [{}]",
        args.code,
        args.quantity,
        args.dir.display(),
        structs.join(", ")
    ));

    let result = adsorption::assemble(&args.dir, args.code, args.quantity, &structs)?;

    let (scale, unit) = if args.ev {
        (HARTREE, "eV")
    } else {
        (1.0, args.code.energy_unit())
    };

    output::print_value(&structs[0], result.combined * scale, unit);
    output::print_value(&structs[1], result.slab * scale, unit);
    output::print_value(&structs[2], result.adsorbate * scale, unit);
    println!();
    output::print_value("Eads", result.eads * scale, unit);

    if args.ev && args.code.energy_unit() != "Eh" {
        output::print_warning(&format!(
            "--ev assumes Hartree input but {} reports {}",
            args.code,
            args.code.energy_unit()
        ));
    }

    Ok(())
}
