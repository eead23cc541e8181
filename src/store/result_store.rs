//! # 结果累积存储
//!
//! 持久化的结果表：一个文本文件，包含两个命名段落。
//!
//! ## 文件格式
//! ```text
//! [Results]
//! Atmo,Altitude,Zenith,SpecBand,ToaWattTot,...,effTauSun,effTau300
//! MidLatMaritimeSummer,0,45,MWIR,...
//! [SpecRanges]
//! SpecBand,LowerUm,UpperUm
//! MWIR,3,5
//! ```
//! 每段是带表头的 CSV。`[Results]` 的列名与顺序必须与 `RESULT_COLUMNS` 完全一致，
//! 否则报 `SchemaMismatch`。`[SpecRanges]` 记录生成结果时使用的波段目录。
//!
//! ## 并发约束
//! 每次追加都是整文件的读-改-写，不加锁。同一存储路径只允许单个写入者，
//! 由调用方保证串行访问。
//!
//! ## 依赖关系
//! - 被 `commands/integrate.rs`, `commands/batch.rs`, `commands/show.rs` 使用
//! - 使用 `csv` + `serde` 读写段落内容

use crate::error::{BandradError, Result};
use crate::models::{IntegratedResult, SpectralBand, SpectralCatalog, RESULT_COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};

/// 结果段名称
pub const RESULTS_SECTION: &str = "Results";

/// 波段目录段名称
pub const RANGES_SECTION: &str = "SpecRanges";

/// 波段目录段列名
pub const RANGE_COLUMNS: [&str; 3] = ["SpecBand", "LowerUm", "UpperUm"];

/// 已持久化的结果表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    /// 累积的结果行（追加顺序）
    pub rows: Vec<IntegratedResult>,
    /// 最近一次写入时使用的波段目录
    pub ranges: SpectralCatalog,
}

/// 读取结果存储，文件不存在时返回空表
pub fn load_store(path: &Path) -> Result<ResultTable> {
    if !path.exists() {
        return Ok(ResultTable::default());
    }

    let content = fs::read_to_string(path).map_err(|e| BandradError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_store_content(&content, &path.display().to_string())
}

/// 追加结果并写回
///
/// 读取已有表（模式不符即报错），按给定顺序追加 `results`，
/// 连同当前波段目录一起整体写回。不去重：相同输入调用两次会得到重复行。
///
/// # 返回
/// 写回后表中的总行数
pub fn append_results(
    results: &[IntegratedResult],
    catalog: &SpectralCatalog,
    path: &Path,
) -> Result<usize> {
    let mut table = load_store(path)?;
    table.rows.extend_from_slice(results);
    table.ranges = catalog.clone();

    write_store(path, &table)?;
    Ok(table.rows.len())
}

/// 整体写出结果存储
///
/// 先写同目录下的临时文件再重命名覆盖，写入中断时原存储保持完整。
pub fn write_store(path: &Path, table: &ResultTable) -> Result<()> {
    let content = render_store(table)?;
    let tmp = temp_path(path);

    fs::write(&tmp, content).map_err(|e| BandradError::FileWriteError {
        path: tmp.display().to_string(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        BandradError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }
    })
}

/// 同目录下的临时文件 `.<name>.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "store".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// 渲染为两段式文本
pub fn render_store(table: &ResultTable) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("[{}]\n", RESULTS_SECTION));
    out.push_str(&render_section(&RESULT_COLUMNS, &table.rows)?);

    out.push_str(&format!("[{}]\n", RANGES_SECTION));
    out.push_str(&render_section(&RANGE_COLUMNS, table.ranges.bands())?);

    Ok(out)
}

fn render_section<T: serde::Serialize>(columns: &[&str], rows: &[T]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // 显式写表头，空表也保留列名
    wtr.write_record(columns)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| BandradError::Other(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| BandradError::Other(e.to_string()))
}

/// 从字符串内容解析结果存储
pub fn parse_store_content(content: &str, source_name: &str) -> Result<ResultTable> {
    let sections = split_sections(content);

    if sections.is_empty() {
        // 空文件视为空表
        if content.trim().is_empty() {
            return Ok(ResultTable::default());
        }
        return Err(BandradError::SchemaMismatch {
            path: source_name.to_string(),
            section: RESULTS_SECTION.to_string(),
            expected: format!("[{}] section", RESULTS_SECTION),
            found: "no named sections".to_string(),
        });
    }

    let results_body = sections
        .iter()
        .find(|(name, _)| name == RESULTS_SECTION)
        .map(|(_, body)| body.as_str())
        .ok_or_else(|| BandradError::SchemaMismatch {
            path: source_name.to_string(),
            section: RESULTS_SECTION.to_string(),
            expected: format!("[{}] section", RESULTS_SECTION),
            found: format!(
                "sections {}",
                sections
                    .iter()
                    .map(|(n, _)| format!("[{}]", n))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })?;

    let rows: Vec<IntegratedResult> =
        read_section(results_body, &RESULT_COLUMNS, RESULTS_SECTION, source_name)?;

    let ranges = match sections.iter().find(|(name, _)| name == RANGES_SECTION) {
        Some((_, body)) => {
            let bands: Vec<SpectralBand> =
                read_section(body, &RANGE_COLUMNS, RANGES_SECTION, source_name)?;
            bands
                .into_iter()
                .map(|b| {
                    SpectralBand::new(b.name.clone(), b.lower_um, b.upper_um).map_err(|reason| {
                        BandradError::InvalidStoredBand {
                            path: source_name.to_string(),
                            section: RANGES_SECTION.to_string(),
                            band: b.name,
                            reason,
                        }
                    })
                })
                .collect::<Result<SpectralCatalog>>()?
        }
        None => SpectralCatalog::new(),
    };

    Ok(ResultTable { rows, ranges })
}

/// 按 `[Name]` 行切分段落
fn split_sections(content: &str) -> Vec<(String, String)> {
    let mut sections: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() > 2 {
            sections.push((trimmed[1..trimmed.len() - 1].to_string(), String::new()));
            continue;
        }
        if let Some((_, body)) = sections.last_mut() {
            if !trimmed.is_empty() {
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    sections
}

fn read_section<T: serde::de::DeserializeOwned>(
    body: &str,
    columns: &[&str],
    section: &str,
    source_name: &str,
) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());

    let headers = rdr.headers()?.clone();
    let found: Vec<&str> = headers.iter().collect();
    if found != columns {
        return Err(BandradError::SchemaMismatch {
            path: source_name.to_string(),
            section: section.to_string(),
            expected: columns.join(","),
            found: found.join(","),
        });
    }

    rdr.deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(BandradError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunKey;

    fn catalog() -> SpectralCatalog {
        vec![
            SpectralBand::new("MWIR", 3.0, 5.0).unwrap(),
            SpectralBand::new("LWIR", 8.0, 12.0).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    fn row(band: &str, toa: f64) -> IntegratedResult {
        let key = RunKey::new("TropicalDesert", 30000.0, 42.5);
        IntegratedResult {
            toa_watt_tot: 2.0 * toa,
            toa_watt: toa,
            boa_watt: 0.65 * toa,
            toa_q: 1.234_567_890_123e21,
            eff_tau_sun: 0.81,
            eff_tau_300: 0.79,
            ..IntegratedResult::empty(&key, band)
        }
    }

    #[test]
    fn test_append_creates_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmos.csv");

        let n = append_results(&[row("MWIR", 10.0), row("LWIR", 3.5)], &catalog(), &path).unwrap();
        assert_eq!(n, 2);

        let table = load_store(&path).unwrap();
        assert_eq!(table.rows, vec![row("MWIR", 10.0), row("LWIR", 3.5)]);
        assert_eq!(table.ranges, catalog());
    }

    #[test]
    fn test_append_merges_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmos.csv");
        let batch = [row("MWIR", 10.0), row("LWIR", 3.5)];

        append_results(&batch, &catalog(), &path).unwrap();
        let n = append_results(&batch, &catalog(), &path).unwrap();
        assert_eq!(n, 4);

        let table = load_store(&path).unwrap();
        assert_eq!(table.rows[0], table.rows[2]);
        assert_eq!(table.rows[1], table.rows[3]);
    }

    #[test]
    fn test_header_layout() {
        let table = ResultTable {
            rows: vec![],
            ranges: catalog(),
        };
        let text = render_store(&table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[Results]");
        assert_eq!(lines[1], RESULT_COLUMNS.join(","));
        assert_eq!(lines[2], "[SpecRanges]");
        assert_eq!(lines[3], "SpecBand,LowerUm,UpperUm");
        assert_eq!(lines[4], "MWIR,3.0,5.0");
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let content = "[Results]\nAtmo,Altitude,Elevation,SpecBand\nx,0,0,MWIR\n";
        let err = parse_store_content(content, "old.csv").unwrap_err();
        match err {
            BandradError::SchemaMismatch { path, section, .. } => {
                assert_eq!(path, "old.csv");
                assert_eq!(section, "Results");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let mut cols = RESULT_COLUMNS.to_vec();
        cols.swap(4, 5);
        let content = format!("[Results]\n{}\n", cols.join(","));
        assert!(matches!(
            parse_store_content(&content, "t"),
            Err(BandradError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_results_section_rejected() {
        assert!(matches!(
            parse_store_content("[SpecRanges]\nSpecBand,LowerUm,UpperUm\n", "t"),
            Err(BandradError::SchemaMismatch { .. })
        ));
        assert!(matches!(
            parse_store_content("Atmo,Altitude\n", "t"),
            Err(BandradError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_or_empty_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_store(&dir.path().join("none.csv")).unwrap();
        assert!(table.rows.is_empty());
        assert!(parse_store_content("\n", "t").unwrap().rows.is_empty());
    }

    #[test]
    fn test_mismatched_store_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmos.csv");
        let original = "[Results]\nfoo,bar\n1,2\n";
        fs::write(&path, original).unwrap();

        assert!(append_results(&[row("MWIR", 1.0)], &catalog(), &path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmos.csv");

        append_results(&[row("MWIR", 1.0)], &catalog(), &path).unwrap();
        append_results(&[row("LWIR", 2.0)], &catalog(), &path).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["atmos.csv".to_string()]);
        assert_eq!(load_store(&path).unwrap().rows.len(), 2);
    }

    #[test]
    fn test_failed_write_keeps_previous_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmos.csv");
        append_results(&[row("MWIR", 1.0)], &catalog(), &path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // 临时文件位置被目录占用，写入失败
        fs::create_dir(temp_path(&path)).unwrap();
        let err = append_results(&[row("LWIR", 2.0)], &catalog(), &path).unwrap_err();
        assert!(matches!(err, BandradError::FileWriteError { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_stored_ranges_are_validated() {
        let content = format!(
            "[Results]\n{}\n[SpecRanges]\nSpecBand,LowerUm,UpperUm\nMWIR,3.0,5.0\nBAD,12.0,8.0\n",
            RESULT_COLUMNS.join(",")
        );
        match parse_store_content(&content, "edited.csv").unwrap_err() {
            BandradError::InvalidStoredBand { band, section, .. } => {
                assert_eq!(band, "BAD");
                assert_eq!(section, "SpecRanges");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
