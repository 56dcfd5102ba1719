//! # exponent 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/exponent.rs` 定义的参数
//! - 使用 `energetics/cluster.rs`

use crate::cli::exponent::ExponentArgs;
use crate::utils::output;
use eads_toolkit::energetics::{fit_exponent, DEFAULT_CLUSTER_SIZES};
use eads_toolkit::error::{EadsError, Result};

use serde::Deserialize;
use std::path::Path;

/// CSV 输入行
#[derive(Debug, Deserialize)]
struct ClusterRow {
    atoms: usize,
    eads: f64,
}

/// 执行 exponent 命令
pub fn execute(args: ExponentArgs) -> Result<()> {
    output::print_header("Cluster Size Extrapolation");

    let (eads, atoms) = match args.csv {
        Some(ref path) => read_cluster_csv(path)?,
        None if args.atoms.is_empty() => (args.eads, DEFAULT_CLUSTER_SIZES.to_vec()),
        None => (args.eads, args.atoms),
    };

    let fit = fit_exponent(&eads, &atoms)?;

    output::print_info(&format!(
        "{} clusters: {:?}",
        eads.len(),
        &atoms[..eads.len()]
    ));
    output::print_value("Exponent", fit.exponent, "");
    output::print_value("RMSD", fit.rmsd, "");
    output::print_value("Slope", fit.slope, "");
    output::print_value("Eads (N → ∞)", fit.intercept, "");
    output::print_done(&format!("Optimal exponent: {:.2}", fit.exponent));

    Ok(())
}

/// 读取 `atoms,eads` 两列的 CSV
fn read_cluster_csv(path: &Path) -> Result<(Vec<f64>, Vec<usize>)> {
    if !path.is_file() {
        return Err(EadsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut eads = Vec::new();
    let mut atoms = Vec::new();

    for row in rdr.deserialize() {
        let row: ClusterRow = row?;
        eads.push(row.eads);
        atoms.push(row.atoms);
    }

    Ok((eads, atoms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_cluster_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clusters.csv");
        std::fs::write(&path, "atoms, eads\n6, -0.10\n22, -0.15\n34,-0.16\n").unwrap();

        let (eads, atoms) = read_cluster_csv(&path).unwrap();
        assert_eq!(atoms, vec![6, 22, 34]);
        assert_eq!(eads, vec![-0.10, -0.15, -0.16]);
    }

    #[test]
    fn test_read_cluster_csv_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_cluster_csv(&dir.path().join("none.csv")),
            Err(EadsError::FileNotFound { .. })
        ));
    }
}
