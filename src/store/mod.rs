//! # 结果存储模块
//!
//! 累积积分结果并与波段目录一起持久化。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`
//! - 子模块: result_store

pub mod result_store;

pub use result_store::{append_results, load_store};
