//! # 解析器模块
//!
//! 光谱波段目录与 MODTRAN tape7 输出的解析器。
//!
//! ## 依赖关系
//! - 被 `integration/`, `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: ranges, tape7

pub mod ranges;
pub mod tape7;

pub use ranges::load_catalog;
