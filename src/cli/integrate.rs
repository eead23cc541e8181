//! # integrate 子命令 CLI 定义
//!
//! 对单个 tape7 或目录下的所有 tape7 进行波段积分并追加到结果存储。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/integrate.rs`

use clap::Args;
use std::path::PathBuf;

/// integrate 子命令参数
#[derive(Args, Debug)]
pub struct IntegrateArgs {
    /// Input: a tape7 file, or a directory searched for tape7 files
    pub input: PathBuf,

    /// Spectral range catalog (`<name> <lower_um> <upper_um>` per line)
    #[arg(long, env = "BANDRAD_RANGES", default_value = "StandardSpectralRanges.txt")]
    pub ranges: PathBuf,

    /// Atmosphere scenario name recorded in the Atmo column
    #[arg(long)]
    pub scenario: String,

    /// Altitude in metres recorded in the Altitude column
    #[arg(long)]
    pub altitude: f64,

    /// Zenith/elevation angle in degrees (single-file mode; directory mode
    /// reads the angle from each tape7's parent directory name)
    #[arg(long)]
    pub angle: Option<f64>,

    /// Result store to append to
    #[arg(long, env = "BANDRAD_STORE", default_value = "atmos-elevation-angles.csv")]
    pub store: PathBuf,

    /// File name pattern in directory mode (comma separated)
    #[arg(long, default_value = "tape7")]
    pub pattern: String,

    /// Recurse into subdirectories (directory mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, directory mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Print the results without writing them to the store
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
