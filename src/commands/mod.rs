//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `integration/`, `store/`, `batch/`, `utils/`
//! - 子模块: integrate, batch, normalize, bands, show, report

pub mod bands;
pub mod batch;
pub mod integrate;
pub mod normalize;
pub mod report;
pub mod show;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Integrate(args) => integrate::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Normalize(args) => normalize::execute(args),
        Commands::Bands(args) => bands::execute(args),
        Commands::Show(args) => show::execute(args),
    }
}
