//! # 团簇尺寸外推指数拟合
//!
//! 团簇模型吸附能随原子数 N 收敛，形式为 `E(N) = E∞ + s / N^p`。
//! 在固定网格 p ∈ {0.10, 0.11, …, 10.09} 上逐一做最小二乘线性回归，
//! 取 RMSD 最小的 p；并列时取网格中靠前者。
//!
//! ## 依赖关系
//! - 被 `commands/exponent.rs` 使用

use crate::error::{EadsError, Result};

/// 默认团簇总原子数序列
pub const DEFAULT_CLUSTER_SIZES: [usize; 9] = [6, 22, 34, 42, 58, 82, 84, 100, 108];

/// 网格点数
const GRID_SIZE: usize = 1000;

/// 拟合结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentFit {
    /// 最优指数 p
    pub exponent: f64,
    /// 对应的均方根偏差
    pub rmsd: f64,
    /// 在网格中的位置
    pub index: usize,
    /// 回归斜率 s
    pub slope: f64,
    /// 回归截距，即 N → ∞ 外推的吸附能
    pub intercept: f64,
}

/// 候选指数网格
pub fn exponent_grid() -> impl Iterator<Item = f64> {
    (0..GRID_SIZE).map(|i| ((0.1 + 0.01 * i as f64) * 1000.0).round() / 1000.0)
}

/// 普通最小二乘 y = intercept + slope·x
fn linregress(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let (sxy, sxx) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxy, sxx), (xi, yi)| {
            let dx = xi - x_mean;
            (sxy + dx * (yi - y_mean), sxx + dx * dx)
        });

    let slope = sxy / sxx;
    (slope, y_mean - slope * x_mean)
}

/// 在网格上寻找最优指数，返回完整拟合信息
pub fn fit_exponent(eads: &[f64], atom_counts: &[usize]) -> Result<ExponentFit> {
    if eads.len() < 2 {
        return Err(EadsError::InvalidArgument(format!(
            "At least two adsorption energies are required, got {}",
            eads.len()
        )));
    }
    if atom_counts.len() < eads.len() {
        return Err(EadsError::InvalidArgument(format!(
            "{} adsorption energies but only {} cluster sizes",
            eads.len(),
            atom_counts.len()
        )));
    }

    let sizes = &atom_counts[..eads.len()];
    if sizes.iter().any(|&n| n == 0) {
        return Err(EadsError::InvalidArgument(
            "Cluster sizes must be positive".to_string(),
        ));
    }
    if sizes.iter().all(|&n| n == sizes[0]) {
        return Err(EadsError::InvalidArgument(
            "Cluster sizes must not all be equal".to_string(),
        ));
    }

    let mut best: Option<ExponentFit> = None;

    for (index, p) in exponent_grid().enumerate() {
        let x: Vec<f64> = sizes.iter().map(|&n| 1.0 / (n as f64).powf(p)).collect();
        let (slope, intercept) = linregress(&x, eads);

        let msd = x
            .iter()
            .zip(eads)
            .map(|(xi, yi)| (intercept + slope * xi - yi).powi(2))
            .sum::<f64>()
            / eads.len() as f64;
        let rmsd = msd.sqrt();

        if best.map_or(true, |b| rmsd < b.rmsd) {
            best = Some(ExponentFit {
                exponent: p,
                rmsd,
                index,
                slope,
                intercept,
            });
        }
    }

    let best = best.ok_or_else(|| EadsError::Other("Empty exponent grid".to_string()))?;
    log::debug!(
        "Best exponent {} (grid index {}), RMSD {:.3e}",
        best.exponent,
        best.index,
        best.rmsd
    );

    Ok(best)
}

/// 在网格上寻找最优指数
pub fn find_exponent(eads: &[f64], atom_counts: &[usize]) -> Result<f64> {
    fit_exponent(eads, atom_counts).map(|fit| fit.exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn synthetic(p: f64, intercept: f64, slope: f64, sizes: &[usize]) -> Vec<f64> {
        sizes
            .iter()
            .map(|&n| intercept + slope / (n as f64).powf(p))
            .collect()
    }

    #[test]
    fn test_grid_bounds() {
        let grid: Vec<f64> = exponent_grid().collect();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.1);
        assert_eq!(grid[999], 10.09);
        assert_eq!(grid[140], 1.5);
    }

    #[test]
    fn test_recovers_known_exponent() {
        for p_true in [0.5, 1.0, 1.5, 2.37] {
            let eads = synthetic(p_true, -0.2, 1.3, &DEFAULT_CLUSTER_SIZES);
            let p = find_exponent(&eads, &DEFAULT_CLUSTER_SIZES).unwrap();
            assert!((p - p_true).abs() <= 0.01 + 1e-9, "{} vs {}", p, p_true);
        }
    }

    #[test]
    fn test_fit_reports_intercept() {
        let sizes = &DEFAULT_CLUSTER_SIZES[..6];
        let eads = synthetic(1.0, -0.18, 0.9, sizes);
        let fit = fit_exponent(&eads, &DEFAULT_CLUSTER_SIZES).unwrap();
        assert_relative_eq!(fit.exponent, 1.0);
        assert_eq!(fit.index, 90);
        assert_relative_eq!(fit.intercept, -0.18, epsilon = 1e-8);
        assert_relative_eq!(fit.slope, 0.9, epsilon = 1e-8);
        assert!(fit.rmsd < 1e-10);
    }

    #[test]
    fn test_linregress_exact_line() {
        let (slope, intercept) = linregress(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]);
        assert_relative_eq!(slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(intercept, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(find_exponent(&[-0.2], &[6]).is_err());
        assert!(find_exponent(&[-0.2, -0.3, -0.4], &[6, 22]).is_err());
        assert!(find_exponent(&[-0.2, -0.3], &[10, 10]).is_err());
        assert!(find_exponent(&[-0.2, -0.3], &[0, 10]).is_err());
    }
}
