//! # 结果展示
//!
//! 将积分结果整理成终端表格。
//!
//! ## 依赖关系
//! - 被 `commands/integrate.rs`, `commands/batch.rs`, `commands/show.rs` 使用
//! - 使用 `tabled`

use crate::models::{IntegratedResult, SpectralCatalog};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 积分结果表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Atmo")]
    scenario: String,
    #[tabled(rename = "Alt (m)")]
    altitude: String,
    #[tabled(rename = "Angle (°)")]
    zenith: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "TOA (W/m²/sr)")]
    toa_watt: String,
    #[tabled(rename = "BOA (W/m²/sr)")]
    boa_watt: String,
    #[tabled(rename = "Lpath (W/m²/sr)")]
    lpath_watt: String,
    #[tabled(rename = "τ 6000K")]
    eff_tau_sun: String,
    #[tabled(rename = "τ 300K")]
    eff_tau_300: String,
}

impl From<&IntegratedResult> for ResultRow {
    fn from(r: &IntegratedResult) -> Self {
        ResultRow {
            scenario: r.scenario.clone(),
            altitude: format!("{:.0}", r.altitude),
            zenith: format!("{:.2}", r.zenith),
            band: r.band.clone(),
            toa_watt: format!("{:.4e}", r.toa_watt),
            boa_watt: format!("{:.4e}", r.boa_watt),
            lpath_watt: format!("{:.4e}", r.lpath_watt),
            eff_tau_sun: format!("{:.4}", r.eff_tau_sun),
            eff_tau_300: format!("{:.4}", r.eff_tau_300),
        }
    }
}

/// 打印结果表格（最多 `limit` 行）
pub fn print_results(results: &[IntegratedResult], limit: usize) {
    let rows: Vec<ResultRow> = results.iter().take(limit).map(ResultRow::from).collect();
    println!("{}", Table::new(&rows));

    if results.len() > limit {
        output::print_info(&format!(
            "... {} more rows not shown",
            results.len() - limit
        ));
    }
}

/// 对重复定义的波段名给出警告
pub fn warn_overridden(catalog: &SpectralCatalog) {
    for name in catalog.overridden() {
        output::print_warning(&format!(
            "Band '{}' is defined more than once; the last definition is used",
            name
        ));
    }
}
