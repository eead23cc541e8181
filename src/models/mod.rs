//! # 数据模型模块
//!
//! 定义光谱波段、光谱采样、积分结果和标准大气场景。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `integration/`, `store/` 和 `commands/` 使用
//! - 子模块: band, sample, result, atmosphere

pub mod atmosphere;
pub mod band;
pub mod result;
pub mod sample;

pub use band::{SpectralBand, SpectralCatalog};
pub use result::{IntegratedResult, RunKey, RESULT_COLUMNS};
pub use sample::SpectralSample;
