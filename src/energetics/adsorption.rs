//! # 吸附能组装
//!
//! `Eads = E(吸附物+表面) − E(表面) − E(吸附物)`
//!
//! 三个结构目录按固定角色顺序给出，每个目录下读取该格式约定的主输出文件。
//! 色散、BSSE 等加和校正由调用方用不同量类型多次调用后自行组合。
//!
//! ## 依赖关系
//! - 被 `commands/adsorption.rs` 使用
//! - 使用 `parsers/energy.rs`

use crate::error::{EadsError, Result};
use crate::models::{CodeFormat, Quantity, QuantitySpec};
use crate::parsers::energy;
use std::fmt;
use std::path::Path;

/// 默认结构目录：吸附物+表面、表面（含鬼原子）、吸附物（含鬼原子）
pub const DEFAULT_STRUCTS: [&str; 3] = ["AD_SLAB", "SLAB_CP", "AD_CP"];

/// 吸附能及其三个分量（原始单位）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsorptionEnergy {
    pub combined: f64,
    pub slab: f64,
    pub adsorbate: f64,
    pub eads: f64,
}

impl fmt::Display for AdsorptionEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Eads = {:.9} - ({:.9}) - ({:.9}) = {:.9}",
            self.combined, self.slab, self.adsorbate, self.eads
        )
    }
}

/// 读取三个结构的能量并组装吸附能
pub fn assemble<S: AsRef<str>>(
    base_dir: &Path,
    format: CodeFormat,
    quantity: Quantity,
    structs: &[S; 3],
) -> Result<AdsorptionEnergy> {
    let filename = format.report_filename().ok_or_else(|| {
        EadsError::UnsupportedFormat(format!(
            "'{}' has no per-structure report convention",
            format
        ))
    })?;
    QuantitySpec::lookup(format, quantity)?;

    if !base_dir.is_dir() {
        return Err(EadsError::DirectoryNotFound {
            path: base_dir.display().to_string(),
        });
    }

    let mut legs = [0.0; 3];
    for (leg, name) in legs.iter_mut().zip(structs.iter()) {
        let path = base_dir.join(name.as_ref()).join(filename);
        *leg = match energy::try_find_energy(&path, format, quantity)? {
            Some(e) => e,
            None => {
                log::warn!(
                    "{} not found in {}, counted as 0.0",
                    quantity,
                    path.display()
                );
                0.0
            }
        };
    }

    let [combined, slab, adsorbate] = legs;
    Ok(AdsorptionEnergy {
        combined,
        slab,
        adsorbate,
        eads: combined - slab - adsorbate,
    })
}

/// 计算吸附能（原始单位）
pub fn adsorption_energy<S: AsRef<str>>(
    base_dir: &Path,
    format: CodeFormat,
    quantity: Quantity,
    structs: &[S; 3],
) -> Result<f64> {
    assemble(base_dir, format, quantity, structs).map(|a| a.eads)
}
