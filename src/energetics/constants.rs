//! # 物理常数与单位换算
//!
//! Hartree 取 CODATA 2018，k_B 取 ASE 默认值 (CODATA 2014)。

/// 1 Hartree 对应的 eV
pub const HARTREE: f64 = 27.211386245988;

/// 玻尔兹曼常数 (eV/K)
pub const KB: f64 = 8.617330337217213e-05;

/// 1 cm⁻¹ 对应的 eV
pub const CM1_TO_EV: f64 = 1.0 / 8065.54429;

/// quasi-RRHO 阻尼权重的交叉频率：100 cm⁻¹ 换算成 meV
pub const HUNDRED_CM1: f64 = 100.0 * CM1_TO_EV * 1000.0;

/// 虚频在 quasi-RRHO 求和中的占位值 (meV)
pub const IMAGINARY_PLACEHOLDER: f64 = 0.0001;
