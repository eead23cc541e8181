//! # 标准大气场景
//!
//! 批处理默认遍历的场景目录名及其说明（温度、湿度、能见度、气溶胶类型）。
//!
//! ## 依赖关系
//! - 被 `cli/batch.rs`, `commands/batch.rs` 使用

/// (场景目录名, 说明)
pub const STANDARD_ATMOSPHERES: [(&str, &str); 10] = [
    ("ExtremeHotLowHumidity", "44 C, 30% RH (18.1), 77 km Vis Desert"),
    ("ExtremeHumidity", "35 C, 95% RH (37.9), 23 km Vis Rural"),
    ("MidLatMaritimeSummer", "21 C, 76% RH (14), 23 km Vis Maritime"),
    ("MidLatMaritimeWinter", "-1 C, 77% RH (3), 10 km Vis Maritime"),
    ("ScandinavianSummer", "14 C, 75% RH (9), 31 km Vis Maritime"),
    ("ScandinavianWinter", "-15.9 C, 80% RH (1), 31 km Vis Maritime"),
    ("TropicalDesert", "26.6 C, 75% RH (18), 75 km Vis Desert"),
    ("TropicalRural", "26.6 C, 75% RH (18), 23 km Vis Rural"),
    ("TropicalUrban", "26.6 C, 75% RH (18), 5 km Vis Urban"),
    (
        "USStdNavyMarVis23km",
        "15 C, 46% RH (5.9), 23 km Vis Navy Maritime, 7.2 m/s",
    ),
];

/// 所有标准场景名称
pub fn standard_names() -> Vec<String> {
    STANDARD_ATMOSPHERES
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

/// 查询场景说明
pub fn describe(name: &str) -> Option<&'static str> {
    STANDARD_ATMOSPHERES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}
