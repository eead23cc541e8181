//! # 批量执行器
//!
//! 并行执行批量积分任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果顺序与输入顺序一致
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! 每个任务只做纯计算并返回结果，不写共享状态；结果的持久化由调用方在
//! 全部任务完成后一次性完成。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs`, `commands/integrate.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{BandradError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 单个输入处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
    /// 成功输出（输入顺序）
    pub outputs: Vec<T>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        BatchResult {
            success: 0,
            failed: 0,
            failures: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(out) => {
                self.success += 1;
                self.outputs.push(out);
            }
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示按 CPU 核数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理输入列表
    pub fn run<I, T, F>(&self, inputs: &[I], processor: F) -> Result<BatchResult<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(inputs.len() as u64, "Integrating");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| BandradError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| {
                    let result = processor(input);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
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
    fn test_run_preserves_input_order() {
        let inputs: Vec<u32> = (0..64).collect();
        let result = BatchRunner::new(4)
            .run(&inputs, |&n| match n % 8 {
                3 => ProcessResult::Failed(n.to_string(), "boom".to_string()),
                _ => ProcessResult::Success(n * 10),
            })
            .unwrap();

        assert_eq!(result.failed, 8);
        assert_eq!(result.success, 56);
        assert_eq!(&result.outputs[..4], &[0, 10, 20, 40]);
        assert!(result.outputs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.failures[0], ("3".to_string(), "boom".to_string()));
    }

    #[test]
    fn test_runner_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
