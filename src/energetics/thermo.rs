//! # 热化学校正
//!
//! 由振动频率计算零点能 (ZPE)、谐振子内能变化和 quasi-RRHO 校正。
//!
//! ## 单位约定
//! - `vibrational_energy_contribution` / `zpe_correction`: 输入 meV，输出 eV
//! - `quasi_rrho`: 输入 meV（VASP 频率行的倒数第二个字段），
//!   `kT = k_B·T·1000`，输出与输入同一 meV 标度
//!
//! ## quasi-RRHO
//! 每个模式的阻尼权重 ω = 1 / (1 + (ν₀/ν)⁴)，ν₀ 为 100 cm⁻¹。
//! 高频模式 (ω → 1) 按谐振子处理，低频模式 (ω → 0) 趋于经典 ½kT。
//! 虚频以固定占位值参与求和，贡献约为 ½kT。
//!
//! ## 依赖关系
//! - 被 `commands/thermo.rs` 使用
//! - 使用 `energetics/constants.rs`

use super::constants::{HUNDRED_CM1, IMAGINARY_PLACEHOLDER, KB};
use crate::error::{EadsError, Result};

/// quasi-RRHO 校正结果
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThermoCorrection {
    /// 总能量变化（热能 + 零点能）
    pub total: f64,
    /// 热能
    pub thermal: f64,
    /// 零点能
    pub zpe: f64,
    /// k_B·T
    pub kt: f64,
}

/// 实频必须为有限正值，零频模式会使占据数项变为 0/0
fn check_real_modes(real: &[f64]) -> Result<()> {
    match real.iter().find(|nu| !nu.is_finite() || **nu <= 0.0) {
        Some(nu) => Err(EadsError::InvalidArgument(format!(
            "Vibrational energies must be positive, got {} meV",
            nu
        ))),
        None => Ok(()),
    }
}

/// 谐振子模型下 0 K 到 T 的振动内能变化 (eV)
pub fn vibrational_energy_contribution(vib_energies: &[f64], temperature: f64) -> Result<f64> {
    check_real_modes(vib_energies)?;
    let kt = KB * temperature;

    Ok(vib_energies
        .iter()
        .map(|e| e * 0.001)
        .map(|e| e / ((e / kt).exp() - 1.0))
        .sum())
}

/// 零点振动能 (eV)
pub fn zpe_correction(vib_energies: &[f64]) -> f64 {
    vib_energies.iter().map(|e| 0.5 * e * 0.001).sum()
}

/// quasi-RRHO 热能与零点能校正
pub fn quasi_rrho(real: &[f64], imaginary: &[f64], temperature: f64) -> Result<ThermoCorrection> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(EadsError::InvalidArgument(format!(
            "Temperature must be positive, got {}",
            temperature
        )));
    }
    check_real_modes(real)?;

    let kt = KB * temperature * 1000.0;
    let combined = real
        .iter()
        .copied()
        .chain(std::iter::repeat(IMAGINARY_PLACEHOLDER).take(imaginary.len()));

    let mut result = ThermoCorrection {
        kt,
        ..Default::default()
    };

    for nu in combined {
        let omega = 1.0 / (1.0 + (HUNDRED_CM1 / nu).powi(4));
        let occupation = nu / ((nu / kt).exp() - 1.0);
        let du_rrho = occupation + 0.5 * nu;

        result.zpe += omega * 0.5 * nu;
        result.thermal += omega * occupation + (1.0 - omega) * 0.5 * kt;
        result.total += omega * du_rrho + (1.0 - omega) * 0.5 * kt;
    }

    Ok(result)
}

/// 气相分子的 quasi-RRHO 校正
///
/// `dof` 为对称性决定的振动自由度 (3N-6 / 3N-5)，只用于核对模式数，不参与计算。
pub fn quasi_rrho_gas(
    real: &[f64],
    imaginary: &[f64],
    dof: usize,
    temperature: f64,
) -> Result<ThermoCorrection> {
    let modes = real.len() + imaginary.len();
    if modes != dof {
        log::warn!(
            "Spectrum has {} modes but {} vibrational degrees of freedom were given",
            modes,
            dof
        );
    }

    quasi_rrho(real, imaginary, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energetics::constants::CM1_TO_EV;
    use crate::parsers::read_vib_freq;
    use approx::assert_relative_eq;

    const T: f64 = 298.15;

    fn cm1_to_mev(nu: f64) -> f64 {
        nu * CM1_TO_EV * 1000.0
    }

    #[test]
    fn test_zpe_empty() {
        assert_eq!(zpe_correction(&[]), 0.0);
        assert_eq!(vibrational_energy_contribution(&[], T).unwrap(), 0.0);
    }

    #[test]
    fn test_zpe_sum() {
        // 两个模式 100 meV 与 200 meV -> 0.15 eV
        assert_relative_eq!(zpe_correction(&[100.0, 200.0]), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_harmonic_classical_limit() {
        // ε << kT 时每个模式贡献约 kT
        let du = vibrational_energy_contribution(&[0.01], T).unwrap();
        assert_relative_eq!(du, KB * T, max_relative = 1e-3);
    }

    #[test]
    fn test_harmonic_high_frequency_vanishes() {
        let du = vibrational_energy_contribution(&[1000.0], T).unwrap();
        assert!(du < 1e-15);
    }

    #[test]
    fn test_quasi_rrho_empty() {
        let c = quasi_rrho(&[], &[], T).unwrap();
        assert_eq!(c.total, 0.0);
        assert_eq!(c.thermal, 0.0);
        assert_eq!(c.zpe, 0.0);
        assert_relative_eq!(c.kt, KB * T * 1000.0);
    }

    #[test]
    fn test_quasi_rrho_low_frequency_limit() {
        let c = quasi_rrho(&[cm1_to_mev(1.0)], &[], T).unwrap();
        assert_relative_eq!(c.total, 0.5 * c.kt, max_relative = 0.01);
        assert_relative_eq!(c.thermal, 0.5 * c.kt, max_relative = 0.01);
        assert!(c.zpe < 1e-6);
    }

    #[test]
    fn test_quasi_rrho_high_frequency_limit() {
        let nu = cm1_to_mev(10000.0);
        let c = quasi_rrho(&[nu], &[], T).unwrap();
        let harmonic = nu / ((nu / c.kt).exp() - 1.0) + 0.5 * nu;
        assert_relative_eq!(c.total, harmonic, max_relative = 0.01);
        assert_relative_eq!(c.zpe, 0.5 * nu, max_relative = 0.01);
        assert!(c.thermal < 1e-3 * c.kt);
    }

    #[test]
    fn test_crossover_weight_is_half() {
        let c = quasi_rrho(&[HUNDRED_CM1], &[], T).unwrap();
        assert_relative_eq!(c.zpe, 0.25 * HUNDRED_CM1, epsilon = 1e-12);
    }

    #[test]
    fn test_imaginary_modes_use_placeholder() {
        let a = quasi_rrho(&[40.0], &[5.0], T).unwrap();
        let b = quasi_rrho(&[40.0], &[150.0], T).unwrap();
        assert_eq!(a, b);

        let only_imag = quasi_rrho(&[], &[5.0], T).unwrap();
        assert_relative_eq!(only_imag.total, 0.5 * only_imag.kt, max_relative = 1e-6);
        assert!(only_imag.zpe < 1e-12);
    }

    #[test]
    fn test_gas_variant_ignores_dof() {
        let real = [258.553118, 41.406540, 12.0];
        let reference = quasi_rrho(&real, &[], T).unwrap();
        for dof in [1, 3, 6] {
            assert_eq!(quasi_rrho_gas(&real, &[], dof, T).unwrap(), reference);
        }
    }

    #[test]
    fn test_rejects_non_positive_temperature() {
        assert!(quasi_rrho(&[10.0], &[], 0.0).is_err());
        assert!(quasi_rrho(&[10.0], &[], -5.0).is_err());
    }

    #[test]
    fn test_zero_frequency_mode_is_rejected() {
        // 对称化后的平动/转动模式在 OUTCAR 中打印为 0 meV
        let lines = [
            "   1 f  =   62.517894 THz   392.806745 2PiTHz 2085.373254 cm-1   258.553118 meV",
            "   7 f  =    0.000000 THz     0.000000 2PiTHz    0.000000 cm-1     0.000000 meV",
        ];
        let spectrum = read_vib_freq(&lines).unwrap();
        assert_eq!(spectrum.real, vec![258.553118, 0.0]);

        assert!(matches!(
            quasi_rrho(&spectrum.real, &spectrum.imaginary, T),
            Err(EadsError::InvalidArgument(_))
        ));
        assert!(matches!(
            quasi_rrho_gas(&spectrum.real, &spectrum.imaginary, 2, T),
            Err(EadsError::InvalidArgument(_))
        ));
        assert!(matches!(
            vibrational_energy_contribution(&spectrum.real, T),
            Err(EadsError::InvalidArgument(_))
        ));
        assert!(quasi_rrho(&[f64::NAN], &[], T).is_err());
        assert!(quasi_rrho(&[-1.0], &[], T).is_err());
    }
}
