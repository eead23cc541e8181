//! # 光谱波段目录解析器
//!
//! 解析标准光谱范围文件（如 `StandardSpectralRanges.txt`）。
//!
//! ## 格式说明
//! ```text
//! <name> <lower_um> <upper_um>
//! VIS    0.4        0.7
//! MWIR   3.0        5.0
//! ```
//! 空白分隔、无表头。空行和 `#` 开头的注释行被忽略。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/band.rs`

use crate::error::{BandradError, Result};
use crate::models::{SpectralBand, SpectralCatalog};
use std::fs;
use std::path::Path;

/// 读取光谱波段目录文件
pub fn load_catalog(path: &Path) -> Result<SpectralCatalog> {
    let content = fs::read_to_string(path).map_err(|e| BandradError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog_content(&content, &path.display().to_string())
}

/// 从字符串内容解析波段目录
pub fn parse_catalog_content(content: &str, source_name: &str) -> Result<SpectralCatalog> {
    let mut catalog = SpectralCatalog::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason: String| BandradError::MalformedCatalog {
            path: source_name.to_string(),
            line: idx + 1,
            reason,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(malformed(format!(
                "expected '<name> <lower> <upper>', found {} tokens",
                parts.len()
            )));
        }

        let lower: f64 = parts[1]
            .parse()
            .map_err(|_| malformed(format!("invalid lower bound '{}'", parts[1])))?;
        let upper: f64 = parts[2]
            .parse()
            .map_err(|_| malformed(format!("invalid upper bound '{}'", parts[2])))?;

        let band = SpectralBand::new(parts[0], lower, upper).map_err(malformed)?;
        catalog.insert(band);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_basic() {
        let content = r#"
VIS 0.38 0.78
NIR   0.7  0.9
# thermal
MWIR 3.0 5.0
LWIR 8.0 12.0
"#;
        let catalog = parse_catalog_content(content, "test").unwrap();
        assert_eq!(catalog.len(), 4);
        let names: Vec<_> = catalog.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["VIS", "NIR", "MWIR", "LWIR"]);
        for band in &catalog {
            assert!(band.lower_um < band.upper_um);
        }
    }

    #[test]
    fn test_parse_catalog_wrong_arity() {
        let err = parse_catalog_content("VIS 0.4 0.7\nMWIR 3.0\n", "ranges.txt").unwrap_err();
        match err {
            BandradError::MalformedCatalog { path, line, .. } => {
                assert_eq!(path, "ranges.txt");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            parse_catalog_content("MWIR 3.0 5.0 extra\n", "t"),
            Err(BandradError::MalformedCatalog { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_catalog_bad_number() {
        assert!(matches!(
            parse_catalog_content("MWIR three 5.0\n", "t"),
            Err(BandradError::MalformedCatalog { .. })
        ));
    }

    #[test]
    fn test_parse_catalog_inverted_bounds() {
        assert!(matches!(
            parse_catalog_content("MWIR 5.0 3.0\n", "t"),
            Err(BandradError::MalformedCatalog { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("StandardSpectralRanges.txt");
        fs::write(&path, "SWIR 1.0 2.5\nMWIR 3.0 5.0\nSWIR 1.5 1.8\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("SWIR").unwrap().upper_um, 1.8);
        assert_eq!(catalog.overridden().len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/ranges.txt")).unwrap_err();
        assert!(matches!(err, BandradError::FileReadError { .. }));
    }
}
