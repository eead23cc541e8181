//! # normalize 子命令 CLI 定义
//!
//! 由 tape7 光学厚度生成 1 km 归一化透过率（波长域）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/normalize.rs`

use clap::Args;
use std::path::PathBuf;

/// normalize 子命令参数
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// tape7 file containing FREQ and DEPTH columns
    pub input: PathBuf,

    /// Altitude in metres (slant path length = altitude / cos(slant angle))
    #[arg(long)]
    pub altitude: f64,

    /// Slant path zenith angle in degrees
    #[arg(long, default_value_t = 45.0)]
    pub slant_angle: f64,

    /// Number of points on the output wavelength grid
    #[arg(long, default_value_t = 1500)]
    pub points: usize,

    /// Smoothing window width in sample units
    #[arg(long, default_value_t = 8.0)]
    pub window: f64,

    /// Scenario name written in the file header and default file name
    #[arg(long)]
    pub scenario: Option<String>,

    /// Output file (default: `<scenario>-<altitude>m.1km` next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
