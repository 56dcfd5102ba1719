//! # 输出格式与能量量类型
//!
//! 定义支持的计算程序输出格式 (`CodeFormat`)、能量量类型 (`Quantity`)，
//! 以及二者组合到搜索标记的静态查找表 (`QuantitySpec::lookup`)。
//!
//! 每个 (格式, 量) 组合唯一对应一个字面标记字符串、
//! 从行尾数起的字段位置和多行匹配时的选行策略。
//! 表外组合是配置错误，不做任何回退。
//!
//! ## 依赖关系
//! - 被 `parsers/energy.rs`, `energetics/adsorption.rs` 使用
//! - 被 `cli/` 用作参数类型

use crate::error::{EadsError, Result};
use crate::models::report::ReportEncoding;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 计算程序输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeFormat {
    /// MRCC (mrcc.out)
    Mrcc,
    /// ORCA (orca.out)
    Orca,
    /// ORCA DLPNO-MP2 style output (orca.out)
    #[value(name = "orca_mp2", alias = "orca-mp2")]
    OrcaMp2,
    /// VASP OUTCAR including dispersion
    Vasp,
    /// VASP OUTCAR without dispersion
    #[value(name = "vasp_wodisp", alias = "vasp-wodisp")]
    VaspWodisp,
    /// Quantum ESPRESSO pw.x output
    #[value(name = "quantum_espresso", alias = "quantum-espresso", alias = "qe")]
    QuantumEspresso,
    /// CC4S output
    Cc4s,
    /// Standalone DFT-D3 output
    Dftd3,
}

impl CodeFormat {
    pub const ALL: [CodeFormat; 8] = [
        CodeFormat::Mrcc,
        CodeFormat::Orca,
        CodeFormat::OrcaMp2,
        CodeFormat::Vasp,
        CodeFormat::VaspWodisp,
        CodeFormat::QuantumEspresso,
        CodeFormat::Cc4s,
        CodeFormat::Dftd3,
    ];

    /// 报告的解码方式
    ///
    /// VASP/QE/CC4S 系输出可能含非 UTF-8 字节，按 Latin-1 逐字节解码。
    pub fn encoding(self) -> ReportEncoding {
        match self {
            CodeFormat::Mrcc | CodeFormat::Orca | CodeFormat::OrcaMp2 => ReportEncoding::Utf8,
            CodeFormat::Vasp
            | CodeFormat::VaspWodisp
            | CodeFormat::QuantumEspresso
            | CodeFormat::Cc4s
            | CodeFormat::Dftd3 => ReportEncoding::Latin1,
        }
    }

    /// 每个结构目录中主输出文件的约定文件名
    pub fn report_filename(self) -> Option<&'static str> {
        match self {
            CodeFormat::Mrcc => Some("mrcc.out"),
            CodeFormat::Orca | CodeFormat::OrcaMp2 => Some("orca.out"),
            CodeFormat::Vasp | CodeFormat::VaspWodisp => Some("OUTCAR"),
            CodeFormat::QuantumEspresso => Some("espresso.pwo"),
            CodeFormat::Cc4s | CodeFormat::Dftd3 => None,
        }
    }

    /// 能量的原始单位
    pub fn energy_unit(self) -> &'static str {
        match self {
            CodeFormat::Mrcc | CodeFormat::Orca | CodeFormat::OrcaMp2 | CodeFormat::Dftd3 => "Eh",
            CodeFormat::Vasp | CodeFormat::VaspWodisp | CodeFormat::Cc4s => "eV",
            CodeFormat::QuantumEspresso => "Ry",
        }
    }
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodeFormat::Mrcc => "mrcc",
            CodeFormat::Orca => "orca",
            CodeFormat::OrcaMp2 => "orca_mp2",
            CodeFormat::Vasp => "vasp",
            CodeFormat::VaspWodisp => "vasp_wodisp",
            CodeFormat::QuantumEspresso => "quantum_espresso",
            CodeFormat::Cc4s => "cc4s",
            CodeFormat::Dftd3 => "dftd3",
        };
        write!(f, "{}", name)
    }
}

/// 能量量类型
///
/// 名称沿用各程序后处理中约定俗成的写法，`L` 前缀表示局域化 (LNO/DLPNO) 方法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Hf,
    HfLmp2,
    Mp2,
    RiMp2,
    Lmp2,
    Lmp2Tot,
    Lmp2Corr,
    Ccsd,
    CcsdTot,
    Ccsdt,
    CcsdtTot,
    CcsdtMp2Tot,
    Lccsd,
    Lccsdt,
    LccsdtTot,
    LccsdtLmp2Tot,
    LccsdtLccsdTot,
    Fnoccsd,
    FnoccsdTot,
    Fnoccsdt,
    FnoccsdtTot,
    FnoccsdtMp2,
    FnoccsdtMp2Tot,
    Dft,
    B2plyp,
    Dsdpbep86,
    Disp,
    CcsdCorr,
    CcsdFs,
    CcsdBsie,
    TCorr,
    Mp2Fs,
    Mp2Corr,
}

impl Quantity {
    pub fn name(self) -> &'static str {
        match self {
            Quantity::Hf => "hf",
            Quantity::HfLmp2 => "hf_lmp2",
            Quantity::Mp2 => "mp2",
            Quantity::RiMp2 => "ri_mp2",
            Quantity::Lmp2 => "lmp2",
            Quantity::Lmp2Tot => "lmp2_tot",
            Quantity::Lmp2Corr => "lmp2_corr",
            Quantity::Ccsd => "ccsd",
            Quantity::CcsdTot => "ccsd_tot",
            Quantity::Ccsdt => "ccsdt",
            Quantity::CcsdtTot => "ccsdt_tot",
            Quantity::CcsdtMp2Tot => "ccsdt_mp2_tot",
            Quantity::Lccsd => "lccsd",
            Quantity::Lccsdt => "lccsdt",
            Quantity::LccsdtTot => "lccsdt_tot",
            Quantity::LccsdtLmp2Tot => "lccsdt_lmp2_tot",
            Quantity::LccsdtLccsdTot => "lccsdt_lccsd_tot",
            Quantity::Fnoccsd => "fnoccsd",
            Quantity::FnoccsdTot => "fnoccsd_tot",
            Quantity::Fnoccsdt => "fnoccsdt",
            Quantity::FnoccsdtTot => "fnoccsdt_tot",
            Quantity::FnoccsdtMp2 => "fnoccsdt_mp2",
            Quantity::FnoccsdtMp2Tot => "fnoccsdt_mp2_tot",
            Quantity::Dft => "dft",
            Quantity::B2plyp => "b2plyp",
            Quantity::Dsdpbep86 => "dsdpbep86",
            Quantity::Disp => "disp",
            Quantity::CcsdCorr => "ccsd_corr",
            Quantity::CcsdFs => "ccsd_fs",
            Quantity::CcsdBsie => "ccsd_bsie",
            Quantity::TCorr => "t_corr",
            Quantity::Mp2Fs => "mp2_fs",
            Quantity::Mp2Corr => "mp2_corr",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        let quantity = match key.as_str() {
            "hf" => Quantity::Hf,
            "hf_lmp2" => Quantity::HfLmp2,
            "mp2" => Quantity::Mp2,
            "ri_mp2" => Quantity::RiMp2,
            "lmp2" => Quantity::Lmp2,
            "lmp2_tot" => Quantity::Lmp2Tot,
            "lmp2_corr" => Quantity::Lmp2Corr,
            "ccsd" => Quantity::Ccsd,
            "ccsd_tot" => Quantity::CcsdTot,
            "ccsdt" => Quantity::Ccsdt,
            "ccsdt_tot" => Quantity::CcsdtTot,
            "ccsdt_mp2_tot" => Quantity::CcsdtMp2Tot,
            "lccsd" => Quantity::Lccsd,
            "lccsdt" => Quantity::Lccsdt,
            "lccsdt_tot" => Quantity::LccsdtTot,
            "lccsdt_lmp2_tot" => Quantity::LccsdtLmp2Tot,
            "lccsdt_lccsd_tot" => Quantity::LccsdtLccsdTot,
            "fnoccsd" => Quantity::Fnoccsd,
            "fnoccsd_tot" => Quantity::FnoccsdTot,
            "fnoccsdt" => Quantity::Fnoccsdt,
            "fnoccsdt_tot" => Quantity::FnoccsdtTot,
            "fnoccsdt_mp2" => Quantity::FnoccsdtMp2,
            "fnoccsdt_mp2_tot" => Quantity::FnoccsdtMp2Tot,
            "dft" => Quantity::Dft,
            "b2plyp" => Quantity::B2plyp,
            "dsdpbep86" => Quantity::Dsdpbep86,
            "disp" | "dispersion" => Quantity::Disp,
            // CC4S 标签保留其打印写法
            "ccsd_corr" | "ccsd corr" => Quantity::CcsdCorr,
            "ccsd_fs" | "ccsd fs" => Quantity::CcsdFs,
            "ccsd_bsie" | "ccsd bsie" => Quantity::CcsdBsie,
            "t_corr" | "(t) corr" => Quantity::TCorr,
            "mp2_fs" | "mp2 fs" => Quantity::Mp2Fs,
            "mp2_corr" | "mp2 corr" => Quantity::Mp2Corr,
            _ => return Err(format!("Unknown quantity type '{}'", s)),
        };
        Ok(quantity)
    }
}

/// 多行匹配时的选行策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// 取最后一个匹配行（默认）
    Last,
    /// 取第一个匹配行（只在报告开头打印一次的量）
    First,
}

/// 一个 (格式, 量) 组合的提取规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySpec {
    /// 字面搜索标记（非正则）
    pub marker: &'static str,
    /// 从行尾数起的字段位置，1 表示最后一个字段
    pub offset_from_end: usize,
    /// 选行策略
    pub policy: MatchPolicy,
}

impl QuantitySpec {
    const fn last(marker: &'static str, offset_from_end: usize) -> Self {
        QuantitySpec {
            marker,
            offset_from_end,
            policy: MatchPolicy::Last,
        }
    }

    const fn first(marker: &'static str, offset_from_end: usize) -> Self {
        QuantitySpec {
            marker,
            offset_from_end,
            policy: MatchPolicy::First,
        }
    }

    /// 查找 (格式, 量) 对应的提取规则
    pub fn lookup(format: CodeFormat, quantity: Quantity) -> Result<Self> {
        use CodeFormat as F;
        use Quantity as Q;

        let spec = match (format, quantity) {
            // ── MRCC ───────────────────────────────────────────────
            (F::Mrcc, Q::Lccsdt) => Self::last("CCSD(T) correlation energy + MP2 corrections [au]:", 1),
            (F::Mrcc, Q::LccsdtTot) => Self::last("Total LNO-CCSD(T) energy with MP2 corrections [au]", 1),
            (F::Mrcc, Q::LccsdtLmp2Tot) => Self::last("Total LMP2 energy [au]", 1),
            (F::Mrcc, Q::CcsdtMp2Tot) => Self::last("Total MP2 energy [au]", 1),
            (F::Mrcc, Q::Ccsdt) => Self::last("CCSD(T) correlation energy [au]:", 1),
            (F::Mrcc, Q::CcsdtTot) => Self::last("Total CCSD(T) energy", 1),
            (F::Mrcc, Q::Hf) => Self::last("Reference energy [au]:    ", 1),
            (F::Mrcc, Q::Lmp2) => Self::last("LMP2 correlation energy [au]:         ", 1),
            (F::Mrcc, Q::Lmp2Tot) => Self::last("DF-MP2 energy [au]:       ", 1),
            (F::Mrcc, Q::Lmp2Corr) => Self::last("DF-MP2 correlation energy [au]:   ", 1),
            (F::Mrcc, Q::Mp2) => Self::last("MP2 correlation energy [au]:   ", 1),
            (F::Mrcc, Q::Lccsd) => Self::last("CCSD correlation energy + 0.5 MP2 corrections [au]:", 1),
            (F::Mrcc, Q::LccsdtLccsdTot) => Self::last("Total LNO-CCSD energy with MP2 corrections [au]:", 1),
            (F::Mrcc, Q::FnoccsdtTot) => Self::last("Total CCSD(T+) energy + MP2 + PPL corr. [au]", 1),
            (F::Mrcc, Q::FnoccsdTot) => Self::last("Total CCSD energy + MP2 + PPL corr. [au]:", 1),
            // 完整基组 DF-MP2 只在 FNO 计算开头出现一次，之后同名标记是别的量
            (F::Mrcc, Q::FnoccsdtMp2Tot) => Self::first("DF-MP2 energy [au]:", 1),
            (F::Mrcc, Q::Fnoccsdt) => Self::last("CCSD(T+) correlation en. + MP2 + PPL corr. [au]:", 1),
            (F::Mrcc, Q::Fnoccsd) => Self::last("CCSD correlation energy + MP2 + PPL corr. [au]:", 1),
            (F::Mrcc, Q::FnoccsdtMp2) => Self::first("DF-MP2 correlation energy", 1),
            (F::Mrcc, Q::Ccsd) => Self::last("CCSD correlation energy [au]: ", 1),
            (F::Mrcc, Q::CcsdTot) => Self::last("Total CCSD energy [au]: ", 1),
            (F::Mrcc, Q::Dft) => Self::last("***FINAL KOHN-SHAM ENERGY:", 2),
            (F::Mrcc, Q::B2plyp) => Self::last("MP2 contribution [au]:", 1),
            (F::Mrcc, Q::Dsdpbep86) => Self::last("SCS-MP2 contribution [au]:", 1),

            // ── ORCA ───────────────────────────────────────────────
            (F::Orca, Q::Lccsdt | Q::Ccsdt) => Self::last("Final correlation energy", 1),
            (F::Orca, Q::Mp2) => Self::last("E(MP2)", 1),
            (F::Orca, Q::Ccsd) => Self::last("E(CORR)", 1),
            (F::Orca, Q::Hf) => Self::last("E(0)", 1),
            (F::Orca, Q::HfLmp2) => Self::last("Total Energy", 4),
            (F::Orca, Q::Lmp2) => Self::last("E(SL-MP2) including corrections", 1),
            (F::Orca, Q::RiMp2) => Self::last("RI-MP2 CORRELATION ENERGY", 2),
            (F::Orca, Q::Lccsd) => Self::last("E(CORR)(corrected)", 1),
            (F::Orca, Q::Dft) => Self::last("FINAL SINGLE POINT ENERGY", 1),

            // ── ORCA (DLPNO-MP2 布局) ──────────────────────────────
            (F::OrcaMp2, Q::Lccsdt) => Self::last("Final correlation energy", 2),
            (F::OrcaMp2, Q::Hf) => Self::last("Total energy after final integration", 2),
            (F::OrcaMp2, Q::Lmp2) => Self::last("DLPNO-MP2 CORRELATION ENERGY", 2),
            (F::OrcaMp2, Q::Lccsd) => Self::last("E(CORR)(corrected)", 2),

            // ── 周期性 DFT ─────────────────────────────────────────
            (F::Vasp, Q::Dft) => Self::last("energy  without entropy=", 1),
            (F::VaspWodisp, Q::Dft) => Self::last("energy without entropy =", 1),
            (F::QuantumEspresso, Q::Dft) => Self::last("!    total energy              =", 2),

            // ── CC4S ───────────────────────────────────────────────
            (F::Cc4s, Q::CcsdCorr) => Self::last("Ccsd correlation energy:", 1),
            (F::Cc4s, Q::CcsdFs | Q::Mp2Fs) => Self::last("Finite-size energy correction:", 1),
            (F::Cc4s, Q::CcsdBsie) => Self::last("Ccsd-Bsie energy correction:", 1),
            (F::Cc4s, Q::Hf) => Self::last("energy  without entropy=", 1),
            (F::Cc4s, Q::TCorr) => Self::last("(T) correlation energy:", 1),
            (F::Cc4s, Q::Mp2Corr) => Self::last("converged values  ", 1),

            // ── DFT-D3 ─────────────────────────────────────────────
            (F::Dftd3, Q::Disp) => Self::last(" Edisp /kcal,au", 1),

            _ => {
                return Err(EadsError::UnsupportedQuantity {
                    format: format.to_string(),
                    quantity: quantity.to_string(),
                })
            }
        };

        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_mrcc_ccsdt() {
        let spec = QuantitySpec::lookup(CodeFormat::Mrcc, Quantity::Ccsdt).unwrap();
        assert_eq!(spec.marker, "CCSD(T) correlation energy [au]:");
        assert_eq!(spec.offset_from_end, 1);
        assert_eq!(spec.policy, MatchPolicy::Last);
    }

    #[test]
    fn test_lookup_first_match_entries() {
        for q in [Quantity::FnoccsdtMp2, Quantity::FnoccsdtMp2Tot] {
            let spec = QuantitySpec::lookup(CodeFormat::Mrcc, q).unwrap();
            assert_eq!(spec.policy, MatchPolicy::First, "{}", q);
        }
    }

    #[test]
    fn test_lookup_rejects_unknown_pair() {
        let err = QuantitySpec::lookup(CodeFormat::Vasp, Quantity::Ccsdt).unwrap_err();
        assert!(matches!(err, EadsError::UnsupportedQuantity { .. }));
        assert!(QuantitySpec::lookup(CodeFormat::OrcaMp2, Quantity::Dft).is_err());
    }

    #[test]
    fn test_every_format_has_a_quantity() {
        let all_quantities: Vec<Quantity> = [
            "hf", "hf_lmp2", "mp2", "ri_mp2", "lmp2", "ccsd", "ccsdt", "lccsdt", "dft", "disp",
            "ccsd_corr",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

        for format in CodeFormat::ALL {
            let supported = all_quantities
                .iter()
                .filter(|q| QuantitySpec::lookup(format, **q).is_ok())
                .count();
            assert!(supported > 0, "{} has no quantities", format);
        }
    }

    #[test]
    fn test_quantity_parse_aliases() {
        assert_eq!("CCSD corr".parse::<Quantity>().unwrap(), Quantity::CcsdCorr);
        assert_eq!("(T) corr".parse::<Quantity>().unwrap(), Quantity::TCorr);
        assert_eq!("B2PLYP".parse::<Quantity>().unwrap(), Quantity::B2plyp);
        assert_eq!("ri-mp2".parse::<Quantity>().unwrap(), Quantity::RiMp2);
        assert!("ccsdtq".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_quantity_name_round_trip() {
        for name in ["lccsdt_lccsd_tot", "fnoccsdt_mp2_tot", "t_corr", "dsdpbep86"] {
            let q: Quantity = name.parse().unwrap();
            assert_eq!(q.name(), name);
        }
    }
}
