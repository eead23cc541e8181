//! # 波段积分结果数据模型
//!
//! 每个 (场景, 高度, 天顶角, 波段) 组合对应一行结果。
//! 字段名与列顺序构成结果文件的兼容性约定。
//!
//! ## 依赖关系
//! - 被 `integration/engine.rs` 构造
//! - 被 `store/`, `commands/` 使用

use serde::{Deserialize, Serialize};

/// 结果表列名（顺序固定）
pub const RESULT_COLUMNS: [&str; 16] = [
    "Atmo",
    "Altitude",
    "Zenith",
    "SpecBand",
    "ToaWattTot",
    "ToaWatt",
    "BoaWattTot",
    "BoaWatt",
    "LpathWatt",
    "ToaQTot",
    "ToaQ",
    "BoaQTot",
    "BoaQ",
    "LpathQ",
    "effTauSun",
    "effTau300",
];

/// 单次模拟运行的标识
#[derive(Debug, Clone, PartialEq)]
pub struct RunKey {
    /// 大气场景名称
    pub scenario: String,
    /// 高度 (m)
    pub altitude: f64,
    /// 天顶/仰角 (度)，水平路径布局下为距离
    pub angle: f64,
}

impl RunKey {
    pub fn new(scenario: impl Into<String>, altitude: f64, angle: f64) -> Self {
        RunKey {
            scenario: scenario.into(),
            altitude,
            angle,
        }
    }
}

impl std::fmt::Display for RunKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {:.0} m, {:.2}°", self.scenario, self.altitude, self.angle)
    }
}

/// 积分结果行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedResult {
    #[serde(rename = "Atmo")]
    pub scenario: String,
    #[serde(rename = "Altitude")]
    pub altitude: f64,
    #[serde(rename = "Zenith")]
    pub zenith: f64,
    #[serde(rename = "SpecBand")]
    pub band: String,

    // 能量域，W/(m²·sr) 或 W/m²
    #[serde(rename = "ToaWattTot")]
    pub toa_watt_tot: f64,
    #[serde(rename = "ToaWatt")]
    pub toa_watt: f64,
    #[serde(rename = "BoaWattTot")]
    pub boa_watt_tot: f64,
    #[serde(rename = "BoaWatt")]
    pub boa_watt: f64,
    #[serde(rename = "LpathWatt")]
    pub lpath_watt: f64,

    // 光子域，(q/s)/(m²·sr) 或 (q/s)/m²
    #[serde(rename = "ToaQTot")]
    pub toa_q_tot: f64,
    #[serde(rename = "ToaQ")]
    pub toa_q: f64,
    #[serde(rename = "BoaQTot")]
    pub boa_q_tot: f64,
    #[serde(rename = "BoaQ")]
    pub boa_q: f64,
    #[serde(rename = "LpathQ")]
    pub lpath_q: f64,

    #[serde(rename = "effTauSun")]
    pub eff_tau_sun: f64,
    #[serde(rename = "effTau300")]
    pub eff_tau_300: f64,
}

impl IntegratedResult {
    /// 全零结果（波段内无采样）
    pub fn empty(key: &RunKey, band: &str) -> Self {
        IntegratedResult {
            scenario: key.scenario.clone(),
            altitude: key.altitude,
            zenith: key.angle,
            band: band.to_string(),
            toa_watt_tot: 0.0,
            toa_watt: 0.0,
            boa_watt_tot: 0.0,
            boa_watt: 0.0,
            lpath_watt: 0.0,
            toa_q_tot: 0.0,
            toa_q: 0.0,
            boa_q_tot: 0.0,
            boa_q: 0.0,
            lpath_q: 0.0,
            eff_tau_sun: 0.0,
            eff_tau_300: 0.0,
        }
    }
}
