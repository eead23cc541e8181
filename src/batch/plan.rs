//! # 批处理运行计划
//!
//! 遍历 场景 × 高度 × 角度，定位已生成的 tape7 文件。
//!
//! ## 目录结构
//! ```text
//! <root>/
//!   <scenario>/
//!     elev/ (或 horizontal/)
//!       <altitude, {:.0}>/
//!         <angle, 如 45.00>/
//!           tape7
//! ```
//! 角度取自 tape7 所在目录名。高度目录下没有任何 tape7 时产生 `Missing`，
//! 由调用方作为跳过的输入告警，而不是中止整个批处理。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `batch/locator.rs` 查询文件
//! - 使用 `regex` 校验角度目录名

use super::locator::{escape_path, InputLocator};
use crate::error::Result;
use crate::models::RunKey;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 默认的模拟输出文件名
pub const TAPE7: &str = "tape7";

/// 运行目录布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLayout {
    /// 不同天顶/仰角 (度)
    Elevation,
    /// 水平路径，不同距离
    Horizontal,
}

impl RunLayout {
    /// 场景目录下的子目录名
    pub fn dir_name(&self) -> &'static str {
        match self {
            RunLayout::Elevation => "elev",
            RunLayout::Horizontal => "horizontal",
        }
    }
}

impl std::fmt::Display for RunLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// 一个待积分的输入
#[derive(Debug, Clone, PartialEq)]
pub struct RunInput {
    pub key: RunKey,
    pub path: PathBuf,
}

/// 定位结果
#[derive(Debug, Clone, PartialEq)]
pub enum Located {
    /// 找到 tape7
    Found(RunInput),
    /// 高度目录不存在或没有 tape7
    Missing {
        scenario: String,
        altitude: f64,
        dir: PathBuf,
    },
    /// 找到 tape7，但所在目录名不是角度
    Unparsed { path: PathBuf },
}

/// 解析角度目录名（十进制数，如 `45.00`、`-5`）
pub fn parse_angle_dir(name: &str) -> Option<f64> {
    static ANGLE: OnceLock<Regex> = OnceLock::new();
    let re = ANGLE.get_or_init(|| Regex::new(r"^[+-]?\d+(\.\d*)?$").unwrap());

    if re.is_match(name) {
        name.parse().ok()
    } else {
        None
    }
}

/// 从 tape7 路径的父目录名解析角度
pub fn angle_from_path(path: &Path) -> Option<f64> {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .and_then(parse_angle_dir)
}

/// 批处理运行计划
pub struct RunPlan<'a, L: InputLocator> {
    locator: &'a L,
    root: PathBuf,
    layout: RunLayout,
    scenarios: Vec<String>,
    altitudes: Vec<f64>,
    file_name: String,
}

impl<'a, L: InputLocator> RunPlan<'a, L> {
    pub fn new(locator: &'a L, root: impl Into<PathBuf>, layout: RunLayout) -> Self {
        RunPlan {
            locator,
            root: root.into(),
            layout,
            scenarios: Vec::new(),
            altitudes: Vec::new(),
            file_name: TAPE7.to_string(),
        }
    }

    pub fn scenarios(mut self, scenarios: Vec<String>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn altitudes(mut self, altitudes: Vec<f64>) -> Self {
        self.altitudes = altitudes;
        self
    }

    /// 设置模拟输出文件名（默认 `tape7`）
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// 组合数 (场景 × 高度)
    pub fn combinations(&self) -> usize {
        self.scenarios.len() * self.altitudes.len()
    }

    /// 高度目录路径
    pub fn altitude_dir(&self, scenario: &str, altitude: f64) -> PathBuf {
        self.root
            .join(scenario)
            .join(self.layout.dir_name())
            .join(format!("{:.0}", altitude))
    }

    /// 按 场景 → 高度 → 角度 顺序惰性产生定位结果
    pub fn inputs(&self) -> impl Iterator<Item = Result<Located>> + '_ {
        self.scenarios
            .iter()
            .flat_map(move |s| self.altitudes.iter().map(move |&a| (s, a)))
            .flat_map(move |(s, a)| self.locate(s, a))
    }

    fn locate(&self, scenario: &str, altitude: f64) -> Vec<Result<Located>> {
        let dir = self.altitude_dir(scenario, altitude);
        let missing = || Located::Missing {
            scenario: scenario.to_string(),
            altitude,
            dir: dir.clone(),
        };

        if !self.locator.exists(&dir) {
            return vec![Ok(missing())];
        }

        let pattern = format!("{}/*/{}", escape_path(&dir), self.file_name);
        let paths = match self.locator.list(&pattern) {
            Ok(paths) => paths,
            Err(e) => return vec![Err(e)],
        };
        if paths.is_empty() {
            return vec![Ok(missing())];
        }

        let mut located: Vec<(Option<f64>, PathBuf)> = paths
            .into_iter()
            .map(|p| (angle_from_path(&p), p))
            .collect();
        // 角度升序，无法解析的排在最后
        located.sort_by(|a, b| match (a.0, b.0) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.1.cmp(&b.1),
        });

        located
            .into_iter()
            .map(|(angle, path)| {
                Ok(match angle {
                    Some(angle) => Located::Found(RunInput {
                        key: RunKey::new(scenario, altitude, angle),
                        path,
                    }),
                    None => Located::Unparsed { path },
                })
            })
            .collect()
    }
}
