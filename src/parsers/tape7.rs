//! # MODTRAN tape7 输出解析器
//!
//! 读取 tape7 光谱表，按列名提取所需列。
//!
//! ## tape7 格式说明
//! ```text
//! <tape5 卡片回显，若干行>
//!  FREQ  TOT_TRANS  PTH_THRML ... TOTAL_RAD ... DEPTH ... TOA_SUN ...
//!  CM-1                                                    (可选单位行)
//!  2000.  0.5000E+00 ...
//!  ...
//!  -9999.
//! ```
//! 列按表头名称定位，不依赖固定位置，以容忍不同 MODTRAN 版本的列顺序差异。
//! 不假设波数升序。
//!
//! ## 依赖关系
//! - 被 `integration/dataset.rs`, `commands/normalize.rs` 使用
//! - 使用 `models/sample.rs`

use crate::error::{BandradError, Result};
use crate::models::SpectralSample;
use std::fs;
use std::path::Path;

/// 波数列 (cm⁻¹)
pub const FREQ: &str = "FREQ";
/// 总透过率列
pub const TOT_TRANS: &str = "TOT_TRANS";
/// 大气顶太阳光谱辐照度列 (W/(cm²·cm⁻¹))
pub const TOA_SUN: &str = "TOA_SUN";
/// 总路径光谱辐亮度列 (W/(cm²·sr·cm⁻¹))
pub const TOTAL_RAD: &str = "TOTAL_RAD";
/// 光学厚度列
pub const DEPTH: &str = "DEPTH";

/// 积分所需的四列，顺序对应 `SpectralSample` 字段
pub const SAMPLE_COLUMNS: [&str; 4] = [FREQ, TOT_TRANS, TOA_SUN, TOTAL_RAD];

/// 数据结束标记
const END_MARKER: f64 = -9999.0;

/// 按列名提取的数值表
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTable {
    /// 列名（请求顺序）
    pub columns: Vec<String>,
    /// 数据行，每行与 `columns` 一一对应
    pub rows: Vec<Vec<f64>>,
}

impl ColumnTable {
    /// 按名称取出一列
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 解析 tape7 文件，提取指定列
pub fn parse_tape7(path: &Path, columns: &[&str]) -> Result<ColumnTable> {
    let content = fs::read_to_string(path).map_err(|e| BandradError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_tape7_content(&content, columns, &path.display().to_string())
}

/// 从字符串内容解析 tape7
pub fn parse_tape7_content(
    content: &str,
    columns: &[&str],
    source_name: &str,
) -> Result<ColumnTable> {
    let lines: Vec<&str> = content.lines().collect();

    // 定位表头：第一行包含 FREQ 列名的行
    let header_idx = lines
        .iter()
        .position(|l| l.split_whitespace().any(|t| t == FREQ))
        .ok_or_else(|| BandradError::MissingColumn {
            path: source_name.to_string(),
            column: FREQ.to_string(),
        })?;

    let header: Vec<&str> = lines[header_idx].split_whitespace().collect();
    let indices = columns
        .iter()
        .map(|name| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| BandradError::MissingColumn {
                    path: source_name.to_string(),
                    column: name.to_string(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;
    let required = indices.iter().max().map_or(0, |m| m + 1);

    let mut rows = Vec::new();
    let mut units_checked = false;

    for (offset, line) in lines[header_idx + 1..].iter().enumerate() {
        let line_no = header_idx + offset + 2;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        // 表头后第一行若全为非数值，视为单位行
        if !units_checked {
            units_checked = true;
            if tokens.iter().all(|t| t.parse::<f64>().is_err()) {
                continue;
            }
        }

        let first: f64 = match tokens[0].parse() {
            Ok(v) => v,
            Err(_) => {
                return Err(BandradError::MalformedRow {
                    path: source_name.to_string(),
                    line: line_no,
                    reason: format!("non-numeric token '{}'", tokens[0]),
                })
            }
        };
        if first == END_MARKER {
            break;
        }

        if tokens.len() < required {
            return Err(BandradError::MalformedRow {
                path: source_name.to_string(),
                line: line_no,
                reason: format!(
                    "expected at least {} columns, found {}",
                    required,
                    tokens.len()
                ),
            });
        }

        let row = indices
            .iter()
            .map(|&i| {
                tokens[i].parse::<f64>().map_err(|_| BandradError::MalformedRow {
                    path: source_name.to_string(),
                    line: line_no,
                    reason: format!("invalid number '{}' in column {}", tokens[i], header[i]),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Ok(ColumnTable {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    })
}

/// 将 `SAMPLE_COLUMNS` 顺序的表转为采样序列（原始单位，文件顺序）
pub fn samples_from_table(table: &ColumnTable) -> Result<Vec<SpectralSample>> {
    let col = |name: &str| {
        table.column(name).ok_or_else(|| BandradError::MissingColumn {
            path: "<table>".to_string(),
            column: name.to_string(),
        })
    };
    let freq = col(FREQ)?;
    let trans = col(TOT_TRANS)?;
    let sun = col(TOA_SUN)?;
    let rad = col(TOTAL_RAD)?;

    Ok(freq
        .iter()
        .zip(&trans)
        .zip(&sun)
        .zip(&rad)
        .map(|(((&nu, &t), &s), &r)| SpectralSample::new(nu, t, s, r))
        .collect())
}

/// 读取 tape7 中积分所需的采样（原始单位，文件顺序）
pub fn load_samples(path: &Path) -> Result<Vec<SpectralSample>> {
    let table = parse_tape7(path, &SAMPLE_COLUMNS)?;
    samples_from_table(&table)
}
