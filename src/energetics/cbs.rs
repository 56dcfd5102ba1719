//! # 完全基组 (CBS) 两点外推
//!
//! HF 能量按指数形式外推，相关能按幂律外推：
//! ```text
//! E_HF(CBS)   = E_HF(X) − e^{−α√X}·(E_HF(Y) − E_HF(X)) / (e^{−α√Y} − e^{−α√X})
//! E_corr(CBS) = (X^β·E_corr(X) − Y^β·E_corr(Y)) / (X^β − Y^β)
//! ```
//! α/β 参数取自 Neese & Valeev, J. Chem. Theory Comput. 7, 33 (2011)。
//!
//! ## 依赖关系
//! - 被 `commands/cbs.rs` 使用
//! - 使用 `energetics/constants.rs`

use super::constants::HARTREE;
use crate::error::{EadsError, Result};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// 基组族
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BasisFamily {
    /// cc-pVXZ
    Cc,
    /// aug-cc-pVXZ
    Acc,
    /// 混合 aug-cc-pVXZ / cc-pVXZ
    Mixcc,
    /// def2-XZVP
    Def2,
}

impl fmt::Display for BasisFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisFamily::Cc => write!(f, "cc"),
            BasisFamily::Acc => write!(f, "acc"),
            BasisFamily::Mixcc => write!(f, "mixcc"),
            BasisFamily::Def2 => write!(f, "def2"),
        }
    }
}

impl FromStr for BasisFamily {
    type Err = EadsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cc" => Ok(BasisFamily::Cc),
            "acc" => Ok(BasisFamily::Acc),
            "mixcc" => Ok(BasisFamily::Mixcc),
            "def2" => Ok(BasisFamily::Def2),
            _ => Err(EadsError::UnsupportedBasis {
                family: s.to_string(),
                x: 0,
                y: 0,
            }),
        }
    }
}

impl BasisFamily {
    /// 查找 (α, β) 外推参数
    pub fn parameters(self, x: u32, y: u32) -> Result<(f64, f64)> {
        use BasisFamily::*;

        let params = match (self, x, y) {
            (Def2, 2, 3) => (10.39, 2.40),
            (Def2, 3, 4) => (7.88, 2.97),
            (Cc, 2, 3) => (4.42, 2.46),
            (Cc, 3, 4) | (Cc, 4, 5) => (5.46, 3.05),
            (Acc, 2, 3) => (4.30, 2.51),
            (Acc, 3, 4) | (Acc, 4, 5) => (5.79, 3.05),
            (Mixcc, 2, 3) => (4.36, 2.485),
            (Mixcc, 3, 4) | (Mixcc, 4, 5) => (5.625, 3.05),
            _ => {
                return Err(EadsError::UnsupportedBasis {
                    family: self.to_string(),
                    x,
                    y,
                })
            }
        };

        Ok(params)
    }
}

/// 两个基组下的 HF 与相关能
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPointEnergies {
    pub hf_x: f64,
    pub corr_x: f64,
    pub hf_y: f64,
    pub corr_y: f64,
}

/// CBS 外推结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CbsResult {
    pub x: u32,
    pub y: u32,
    pub hf: f64,
    pub corr: f64,
    pub total: f64,
}

impl fmt::Display for CbsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CBS({}/{}) HF: {:.9} Corr: {:.9} Tot: {:.9}",
            self.x, self.y, self.hf, self.corr, self.total
        )
    }
}

/// CBS 外推设置
#[derive(Debug, Clone, Copy)]
pub struct CbsExtrapolation {
    family: BasisFamily,
    x: u32,
    y: u32,
    convert_hartree: bool,
    shift: f64,
}

impl CbsExtrapolation {
    /// 创建新的外推设置（不换算单位、无平移）
    pub fn new(family: BasisFamily, x: u32, y: u32) -> Self {
        Self {
            family,
            x,
            y,
            convert_hartree: false,
            shift: 0.0,
        }
    }

    /// 结果是否从 Hartree 换算为 eV
    pub fn convert_hartree(mut self, convert: bool) -> Self {
        self.convert_hartree = convert;
        self
    }

    /// 加到 HF 与总能量上的平移（换算后施加）
    pub fn shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    /// 执行外推
    pub fn extrapolate(&self, energies: &TwoPointEnergies) -> Result<CbsResult> {
        let (x, y) = (self.x, self.y);

        if x.checked_add(1) != Some(y) {
            log::warn!("Y ({}) does not equal X+1 (X = {})", y, x);
        }

        let (alpha, beta) = self.family.parameters(x, y)?;
        let (xf, yf) = (x as f64, y as f64);

        let ex = (-alpha * xf.sqrt()).exp();
        let ey = (-alpha * yf.sqrt()).exp();
        let mut hf = energies.hf_x - ex * (energies.hf_y - energies.hf_x) / (ey - ex);

        let xb = xf.powf(beta);
        let yb = yf.powf(beta);
        let mut corr = (xb * energies.corr_x - yb * energies.corr_y) / (xb - yb);

        if self.convert_hartree {
            hf *= HARTREE;
            corr *= HARTREE;
        }

        let hf_shifted = hf + self.shift;
        Ok(CbsResult {
            x,
            y,
            hf: hf_shifted,
            corr,
            total: hf_shifted + corr,
        })
    }
}

/// 默认设置下的 CBS 外推
pub fn get_cbs(
    hf_x: f64,
    corr_x: f64,
    hf_y: f64,
    corr_y: f64,
    x: u32,
    y: u32,
    family: &str,
) -> Result<CbsResult> {
    let family: BasisFamily = family.parse()?;
    CbsExtrapolation::new(family, x, y).extrapolate(&TwoPointEnergies {
        hf_x,
        corr_x,
        hf_y,
        corr_y,
    })
}
