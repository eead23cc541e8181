//! # bands / show 子命令 CLI 定义
//!
//! 查看波段目录和结果存储。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bands.rs`, `commands/show.rs`

use clap::Args;
use std::path::PathBuf;

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Spectral range catalog to load
    #[arg(env = "BANDRAD_RANGES", default_value = "StandardSpectralRanges.txt")]
    pub ranges: PathBuf,
}

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Result store to display
    #[arg(env = "BANDRAD_STORE", default_value = "atmos-elevation-angles.csv")]
    pub store: PathBuf,

    /// Only show rows for this spectral band
    #[arg(long)]
    pub band: Option<String>,

    /// Only show rows for this scenario
    #[arg(long)]
    pub scenario: Option<String>,

    /// Maximum number of rows to print
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}
