//! # batch 子命令 CLI 定义
//!
//! 遍历 场景 × 高度 × 角度 目录树，积分所有已有的 tape7。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 运行目录布局
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Layout {
    /// <scenario>/elev/<altitude>/<angle>/tape7
    #[default]
    Elev,
    /// <scenario>/horizontal/<altitude>/<distance>/tape7
    Horizontal,
}

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Root directory containing one directory per scenario
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Spectral range catalog (`<name> <lower_um> <upper_um>` per line)
    #[arg(long, env = "BANDRAD_RANGES", default_value = "StandardSpectralRanges.txt")]
    pub ranges: PathBuf,

    /// Scenario directory names (comma separated; default: the standard atmospheres)
    #[arg(long, value_delimiter = ',')]
    pub scenarios: Vec<String>,

    /// Altitudes in metres (comma separated)
    #[arg(long, value_delimiter = ',', default_value = "0,30000")]
    pub altitudes: Vec<f64>,

    /// Directory layout below each scenario
    #[arg(long, value_enum, default_value = "elev")]
    pub layout: Layout,

    /// Simulation output file name inside each angle directory
    #[arg(long, default_value = "tape7")]
    pub file_name: String,

    /// Result store to append to
    #[arg(long, env = "BANDRAD_STORE", default_value = "atmos-elevation-angles.csv")]
    pub store: PathBuf,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Integrate and report without writing to the store
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
