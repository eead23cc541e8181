//! # bands 命令实现
//!
//! 列出波段目录中的波段及其波数范围。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/ranges.rs`, `models/band.rs`

use crate::cli::inspect::BandsArgs;
use crate::error::Result;
use crate::parsers::load_catalog;
use crate::utils::output;

use super::report;
use tabled::{Table, Tabled};

/// 波段表格行
#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    name: String,
    #[tabled(rename = "Lower (µm)")]
    lower_um: String,
    #[tabled(rename = "Upper (µm)")]
    upper_um: String,
    #[tabled(rename = "Lower (cm⁻¹)")]
    lower_cm1: String,
    #[tabled(rename = "Upper (cm⁻¹)")]
    upper_cm1: String,
}

/// 执行 bands 命令
pub fn execute(args: BandsArgs) -> Result<()> {
    let catalog = load_catalog(&args.ranges)?;

    output::print_header(&format!("Spectral Ranges: {}", args.ranges.display()));
    report::warn_overridden(&catalog);

    if catalog.is_empty() {
        output::print_warning("Catalog contains no bands.");
        return Ok(());
    }

    let rows: Vec<BandRow> = catalog
        .iter()
        .map(|b| {
            let (lo, hi) = b.wavenumber_bounds();
            BandRow {
                name: b.name.clone(),
                lower_um: format!("{:.3}", b.lower_um),
                upper_um: format!("{:.3}", b.upper_um),
                lower_cm1: format!("{:.1}", lo),
                upper_cm1: format!("{:.1}", hi),
            }
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info(&format!("{} bands", catalog.len()));

    Ok(())
}
