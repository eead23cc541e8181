//! # 物理模块
//!
//! 物理常数、单位换算和黑体辐射。
//!
//! ## 依赖关系
//! - 被 `integration/` 使用
//! - 子模块: constants, units, planck

pub mod constants;
pub mod planck;
pub mod units;

pub use planck::{planck_radiance, AMBIENT_TEMPERATURE, SUN_TEMPERATURE};
