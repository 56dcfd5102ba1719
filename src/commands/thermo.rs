//! # thermo 命令实现
//!
//! 读取 VASP 振动频率，输出零点能与热校正。
//!
//! ## 依赖关系
//! - 使用 `cli/thermo.rs` 定义的参数
//! - 使用 `parsers/vibration.rs`, `energetics/thermo.rs`

use crate::cli::thermo::{ThermoArgs, ThermoModel};
use crate::utils::output;
use eads_toolkit::energetics::thermo;
use eads_toolkit::error::Result;
use eads_toolkit::parsers;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct ThermoRow {
    #[tabled(rename = "Term")]
    term: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

impl ThermoRow {
    fn new(term: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            term,
            value: format!("{:.6}", value),
            unit,
        }
    }
}

/// 执行 thermo 命令
pub fn execute(args: ThermoArgs) -> Result<()> {
    output::print_header("Vibrational Thermochemistry");

    let spectrum = parsers::read_vib_freq_file(&args.file)?;
    output::print_info(&format!(
        "'{}': {} real, {} imaginary modes at {:.2} K",
        args.file.display(),
        spectrum.real.len(),
        spectrum.imaginary.len(),
        args.temperature
    ));

    if spectrum.is_empty() {
        output::print_warning("No frequency lines found");
    }

    let rows = match args.model {
        ThermoModel::QuasiRrho => {
            let c = match args.dof {
                Some(dof) => thermo::quasi_rrho_gas(
                    &spectrum.real,
                    &spectrum.imaginary,
                    dof,
                    args.temperature,
                )?,
                None => thermo::quasi_rrho(&spectrum.real, &spectrum.imaginary, args.temperature)?,
            };
            vec![
                ThermoRow::new("ZPE", c.zpe, "meV"),
                ThermoRow::new("Thermal energy", c.thermal, "meV"),
                ThermoRow::new("Total (ZPE + thermal)", c.total, "meV"),
                ThermoRow::new("kT", c.kt, "meV"),
            ]
        }
        ThermoModel::Harmonic => {
            if !spectrum.imaginary.is_empty() {
                output::print_warning("Imaginary modes are ignored by the harmonic model");
            }
            let zpe = thermo::zpe_correction(&spectrum.real);
            let du = thermo::vibrational_energy_contribution(&spectrum.real, args.temperature)?;
            vec![
                ThermoRow::new("ZPE", zpe, "eV"),
                ThermoRow::new("ΔU(0 → T)", du, "eV"),
                ThermoRow::new("Total (ZPE + ΔU)", zpe + du, "eV"),
            ]
        }
    };

    println!("{}", Table::new(&rows));

    Ok(())
}
