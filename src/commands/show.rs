//! # show 命令实现
//!
//! 读取结果存储并按波段/场景过滤显示。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `store/result_store.rs`

use crate::cli::inspect::ShowArgs;
use crate::error::{BandradError, Result};
use crate::models::IntegratedResult;
use crate::store::load_store;
use crate::utils::output;

use super::report;

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    if !args.store.exists() {
        return Err(BandradError::FileNotFound {
            path: args.store.display().to_string(),
        });
    }

    let table = load_store(&args.store)?;
    output::print_header(&format!("Result Store: {}", args.store.display()));
    output::print_field("Rows", &table.rows.len().to_string());
    for band in &table.ranges {
        output::print_field(
            &band.name,
            &format!("{} - {} µm", band.lower_um, band.upper_um),
        );
    }

    let selected: Vec<IntegratedResult> = table
        .rows
        .into_iter()
        .filter(|r| args.band.as_deref().map_or(true, |b| r.band == b))
        .filter(|r| args.scenario.as_deref().map_or(true, |s| r.scenario == s))
        .collect();

    if selected.is_empty() {
        output::print_warning("No rows match the given filters.");
        return Ok(());
    }

    report::print_results(&selected, args.limit);

    Ok(())
}
