//! # 光谱积分模块
//!
//! 波段积分引擎及 tape7 数据集处理。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 使用
//! - 使用 `parsers/`, `physics/`, `models/`
//! - 子模块: trapz, engine, dataset, normalize

pub mod dataset;
pub mod engine;
pub mod normalize;
pub mod trapz;

pub use dataset::integrate_file;
