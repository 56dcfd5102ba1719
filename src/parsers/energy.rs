//! # 能量提取器
//!
//! 在不同程序的文本输出中按字面标记定位某个能量标量。
//!
//! 规则全部来自 `QuantitySpec::lookup`：
//! 1. 找出所有包含标记的行（字面子串，不是正则）
//! 2. 按策略取最后一行或第一行
//! 3. 按空白切分，读取从行尾数起第 N 个字段
//!
//! 没有匹配行时 `extract` 返回 0.0（可选段落缺失，如色散校正），
//! `try_extract` 返回 `None`。字段不足或不是数字则报 `MalformedReport`。
//!
//! ## 依赖关系
//! - 被 `energetics/adsorption.rs`, `commands/` 使用
//! - 使用 `models/report.rs`, `models/quantity.rs`

use crate::error::{EadsError, Result};
use crate::models::{CodeFormat, EnergyReport, MatchPolicy, Quantity, QuantitySpec};
use std::path::Path;

/// 从报告中提取能量，缺失时返回 0.0
pub fn extract(report: &EnergyReport, format: CodeFormat, quantity: Quantity) -> Result<f64> {
    Ok(try_extract(report, format, quantity)?.unwrap_or(0.0))
}

/// 从报告中提取能量，区分"缺失"和"为零"
pub fn try_extract(
    report: &EnergyReport,
    format: CodeFormat,
    quantity: Quantity,
) -> Result<Option<f64>> {
    let spec = QuantitySpec::lookup(format, quantity)?;
    extract_with_spec(report, &spec)
}

/// 按给定规则提取
pub fn extract_with_spec(report: &EnergyReport, spec: &QuantitySpec) -> Result<Option<f64>> {
    let mut matches = report
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(spec.marker));

    let selected = match spec.policy {
        MatchPolicy::First => matches.next(),
        MatchPolicy::Last => matches.last(),
    };

    let (index, line) = match selected {
        Some(hit) => hit,
        None => {
            log::debug!("'{}' not found in {}", spec.marker.trim(), report.name());
            return Ok(None);
        }
    };

    let value = read_field_from_end(line, spec.offset_from_end).map_err(|reason| {
        EadsError::MalformedReport {
            report: report.name().to_string(),
            line: index + 1,
            reason,
        }
    })?;

    log::debug!(
        "{}:{} '{}' -> {}",
        report.name(),
        index + 1,
        spec.marker.trim(),
        value
    );

    Ok(Some(value))
}

/// 读取文件并提取能量，缺失时返回 0.0
pub fn find_energy(path: &Path, format: CodeFormat, quantity: Quantity) -> Result<f64> {
    Ok(try_find_energy(path, format, quantity)?.unwrap_or(0.0))
}

/// 读取文件并提取能量，缺失时返回 None
pub fn try_find_energy(path: &Path, format: CodeFormat, quantity: Quantity) -> Result<Option<f64>> {
    // 先校验组合，避免无意义的文件读取
    let spec = QuantitySpec::lookup(format, quantity)?;
    let report = EnergyReport::from_file(path, format.encoding())?;
    extract_with_spec(&report, &spec)
}

/// 读取从行尾数起第 `offset` 个字段（1 为最后一个）
fn read_field_from_end(line: &str, offset: usize) -> std::result::Result<f64, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if offset == 0 || tokens.len() < offset {
        return Err(format!(
            "expected at least {} fields, found {} in '{}'",
            offset,
            tokens.len(),
            line.trim()
        ));
    }

    let token = tokens[tokens.len() - offset];
    token
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number in '{}'", token, line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn report(content: &str) -> EnergyReport {
        EnergyReport::from_content("test.out", content)
    }

    #[test]
    fn test_mrcc_ccsdt_scenario() {
        let r = report(
            r#" ************************ 2023-04-01 10:00:00 *************************
 Reference energy [au]:                    -76.026760737428
 CCSD(T) correlation energy [au]:      -0.123456789
 Normal termination of mrcc.
"#,
        );
        let e = extract(&r, CodeFormat::Mrcc, Quantity::Ccsdt).unwrap();
        assert_eq!(e, -0.123456789);
    }

    #[test]
    fn test_not_found_returns_zero() {
        let r = report("nothing to see here\n energy without entropy = 1.0\n");
        assert_eq!(extract(&r, CodeFormat::Vasp, Quantity::Dft).unwrap(), 0.0);
        assert_eq!(try_extract(&r, CodeFormat::Vasp, Quantity::Dft).unwrap(), None);
        assert_eq!(
            extract(&report(""), CodeFormat::Dftd3, Quantity::Disp).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_last_match_wins() {
        let r = report(
            r#"  energy  without entropy=     -100.00000000  energy(sigma->0) =     -100.10000000
 some ionic step output
  energy  without entropy=     -101.00000000  energy(sigma->0) =     -101.20000000
"#,
        );
        let e = extract(&r, CodeFormat::Vasp, Quantity::Dft).unwrap();
        assert_eq!(e, -101.2);
    }

    #[test]
    fn test_first_match_for_fno_mp2() {
        let r = report(
            r#" DF-MP2 correlation energy [au]:        -0.500000000000
 ... frozen natural orbitals ...
 DF-MP2 correlation energy [au]:        -0.480000000000
"#,
        );
        let first = extract(&r, CodeFormat::Mrcc, Quantity::FnoccsdtMp2).unwrap();
        let last = extract(&r, CodeFormat::Mrcc, Quantity::Lmp2Corr).unwrap();
        assert_eq!(first, -0.5);
        assert_eq!(last, -0.48);
    }

    #[test]
    fn test_offset_from_end() {
        let mrcc = report(" ***FINAL KOHN-SHAM ENERGY:         -76.4132151452     [AU]\n");
        assert_eq!(
            extract(&mrcc, CodeFormat::Mrcc, Quantity::Dft).unwrap(),
            -76.4132151452
        );

        let qe = report("!    total energy              =     -93.45642066 Ry\n");
        assert_eq!(
            extract(&qe, CodeFormat::QuantumEspresso, Quantity::Dft).unwrap(),
            -93.45642066
        );

        let orca = report("Total Energy       :         -76.02676074 Eh           -2068.79547 eV\n");
        assert_eq!(
            extract(&orca, CodeFormat::Orca, Quantity::HfLmp2).unwrap(),
            -76.02676074
        );
    }

    #[test]
    fn test_single_match_ignores_other_content() {
        let r = report(
            r#"FINAL SINGLE POINT ENERGY       -40.512345678901
E(0)                                       -40.2
random trailing text 1 2 3
"#,
        );
        assert_eq!(
            extract(&r, CodeFormat::Orca, Quantity::Dft).unwrap(),
            -40.512345678901
        );
        assert_eq!(extract(&r, CodeFormat::Orca, Quantity::Hf).unwrap(), -40.2);
    }

    #[test]
    fn test_malformed_line_too_short() {
        let r = report("header\nTotal Energy   -76.0\n");
        let err = extract(&r, CodeFormat::Orca, Quantity::HfLmp2).unwrap_err();
        match err {
            EadsError::MalformedReport { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_non_numeric_field() {
        let r = report(" CCSD(T) correlation energy [au]:      not-a-number\n");
        let err = extract(&r, CodeFormat::Mrcc, Quantity::Ccsdt).unwrap_err();
        assert!(matches!(err, EadsError::MalformedReport { .. }));
    }

    #[test]
    fn test_unknown_pair_is_configuration_error() {
        let r = report("energy  without entropy=  -1.0  energy(sigma->0) = -1.0\n");
        let err = extract(&r, CodeFormat::Vasp, Quantity::Ccsdt).unwrap_err();
        assert!(matches!(err, EadsError::UnsupportedQuantity { .. }));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let r = report(" Ccsd correlation energy: -0.2345\n");
        let a = extract(&r, CodeFormat::Cc4s, Quantity::CcsdCorr).unwrap();
        let b = extract(&r, CodeFormat::Cc4s, Quantity::CcsdCorr).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_find_energy_latin1_outcar() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("OUTCAR");
        let mut bytes = b"  POSCAR = Mg\xB0O slab\n".to_vec();
        bytes.extend_from_slice(
            b"  energy  without entropy=     -215.43210000  energy(sigma->0) =     -215.43300000\n",
        );
        fs::write(&path, bytes).unwrap();

        let e = find_energy(&path, CodeFormat::Vasp, Quantity::Dft).unwrap();
        assert_eq!(e, -215.433);
    }

    #[test]
    fn test_find_energy_unknown_pair_before_io() {
        let err = find_energy(Path::new("/does/not/exist"), CodeFormat::Dftd3, Quantity::Hf)
            .unwrap_err();
        assert!(matches!(err, EadsError::UnsupportedQuantity { .. }));
    }
}
