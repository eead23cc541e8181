//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `integrate`: 单文件/目录波段积分
//! - `batch`: 场景 × 高度 × 角度 批量积分
//! - `normalize`: 1 km 归一化透过率
//! - `bands`: 查看波段目录
//! - `show`: 查看结果存储
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: integrate, batch, normalize, inspect

pub mod batch;
pub mod inspect;
pub mod integrate;
pub mod normalize;

use clap::{Parser, Subcommand};

/// bandrad - MODTRAN tape7 波段积分工具
#[derive(Parser)]
#[command(name = "bandrad")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Band-integrated radiometry from MODTRAN tape7 output", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Integrate tape7 output over spectral bands and append to the result store
    Integrate(integrate::IntegrateArgs),

    /// Integrate every tape7 found under scenario/altitude/angle directories
    Batch(batch::BatchArgs),

    /// Derive 1 km path-normalised transmittance in the wavelength domain
    Normalize(normalize::NormalizeArgs),

    /// List the bands in a spectral range catalog
    Bands(inspect::BandsArgs),

    /// Display the accumulated result store
    Show(inspect::ShowArgs),
}
