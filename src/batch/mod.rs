//! # 批量处理模块
//!
//! 定位模拟输出并批量积分。
//!
//! ## 功能
//! - 文件系统查询接口（存在性、glob 列表）
//! - 场景 × 高度 × 角度 运行计划
//! - 收集匹配文件列表
//! - 并行积分
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod locator;
pub mod plan;
pub mod runner;

pub use collector::FileCollector;
pub use locator::FsLocator;
pub use plan::{Located, RunInput, RunLayout, RunPlan};
pub use runner::{BatchRunner, ProcessResult};
