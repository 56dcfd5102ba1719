//! # 报告文件收集器
//!
//! 根据输入目录和文件名模式收集待提取的报告文件。
//!
//! ## 功能
//! - 单文件或目录输入
//! - glob 文件名匹配（逗号分隔多模式）
//! - 可选递归搜索
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{EadsError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 报告文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有文件）
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    EadsError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，按路径排序
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        // 非递归时仍进入一层子目录：每个结构一个目录
        let max_depth = if self.recursive { usize::MAX } else { 2 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collects_one_level_of_structure_dirs() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("AD_SLAB/OUTCAR"));
        touch(&dir.path().join("SLAB_CP/OUTCAR"));
        touch(&dir.path().join("SLAB_CP/POSCAR"));
        touch(&dir.path().join("deep/nested/OUTCAR"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("OUTCAR")
            .unwrap()
            .collect();
        assert_eq!(files.len(), 2);

        let all = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("OUTCAR")
            .unwrap()
            .recursive(true)
            .collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_multiple_patterns() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a/mrcc.out"));
        touch(&dir.path().join("b/orca.out"));
        touch(&dir.path().join("c/input.inp"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.out, OUTCAR")
            .unwrap()
            .collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileCollector::new(PathBuf::from("."))
            .with_pattern("[")
            .is_err());
    }
}
