//! # 批量执行器
//!
//! 并行地对一组独立的报告文件执行提取任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `rayon` 进行并行计算，`indicatif` 显示进度

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::PathBuf;

use crate::error::{EadsError, Result};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 跳过
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果汇总
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功结果，保持输入顺序
    pub outputs: Vec<T>,
    /// 跳过数量
    pub skipped: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            skipped: 0,
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(out) => self.outputs.push(out),
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => self.failures.push((path, err)),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.outputs.len() + self.skipped + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，0 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表
    pub fn run<T, F>(
        &self,
        files: &[PathBuf],
        pb: &ProgressBar,
        processor: F,
    ) -> Result<BatchResult<T>>
    where
        T: Send,
        F: Fn(&PathBuf) -> ProcessResult<T> + Sync + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| EadsError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_keeps_order_and_counts() {
        let files: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{}", i))).collect();
        let pb = ProgressBar::hidden();

        let result = BatchRunner::new(4)
            .run(&files, &pb, |f| {
                let i: usize = f.to_string_lossy().parse().unwrap();
                match i % 5 {
                    0 => ProcessResult::Failed(f.display().to_string(), "bad".to_string()),
                    1 => ProcessResult::Skipped(f.display().to_string()),
                    _ => ProcessResult::Success(i),
                }
            })
            .unwrap();

        assert_eq!(result.total(), 20);
        assert_eq!(result.failures.len(), 4);
        assert_eq!(result.skipped, 4);
        assert_eq!(result.outputs, vec![2, 3, 4, 7, 8, 9, 12, 13, 14, 17, 18, 19]);
    }

    #[test]
    fn test_zero_jobs_uses_all_cpus() {
        assert!(BatchRunner::new(0).jobs() >= 1);
    }
}
