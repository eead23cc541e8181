//! # normalize 命令实现
//!
//! 读取 tape7 的 FREQ/DEPTH 列，生成 1 km 归一化、平滑并重采样到波长网格的透过率文件。
//!
//! ## 依赖关系
//! - 使用 `cli/normalize.rs` 定义的参数
//! - 使用 `parsers/tape7.rs`, `integration/normalize.rs`

use crate::cli::normalize::NormalizeArgs;
use crate::error::{BandradError, Result};
use crate::integration::normalize::{normalize, slant_path_m, write_spectrum, NormalizeConfig};
use crate::parsers::tape7::{self, DEPTH, FREQ};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 执行 normalize 命令
pub fn execute(args: NormalizeArgs) -> Result<()> {
    output::print_header("1 km Path Normalisation");

    if !args.input.is_file() {
        return Err(BandradError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }
    if args.points < 2 {
        return Err(BandradError::InvalidArgument(format!(
            "at least 2 output points are required, got {}",
            args.points
        )));
    }

    let table = tape7::parse_tape7(&args.input, &[FREQ, DEPTH])?;
    if table.is_empty() {
        return Err(BandradError::InvalidArgument(format!(
            "'{}' has no data rows after the column header",
            args.input.display()
        )));
    }
    let missing = |column: &str| BandradError::MissingColumn {
        path: args.input.display().to_string(),
        column: column.to_string(),
    };
    let wavenumber = table.column(FREQ).ok_or_else(|| missing(FREQ))?;
    let depth = table.column(DEPTH).ok_or_else(|| missing(DEPTH))?;

    let config = NormalizeConfig {
        altitude_m: args.altitude,
        slant_deg: args.slant_angle,
        points: args.points,
        out_width: args.window,
        ..NormalizeConfig::default()
    };

    output::print_info(&format!(
        "{} samples, slant path {:.1} m",
        table.len(),
        slant_path_m(config.altitude_m, config.slant_deg)
    ));

    let spectrum = normalize(&wavenumber, &depth, &config)?;

    let scenario = args
        .scenario
        .clone()
        .unwrap_or_else(|| default_scenario(&args.input));
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, &scenario, args.altitude));

    write_spectrum(&out_path, &scenario, args.altitude, &spectrum)?;

    output::print_success(&format!(
        "Wrote {} points to '{}'",
        spectrum.wavelength_um.len(),
        out_path.display()
    ));

    Ok(())
}

/// 未指定场景名时使用输入文件名
fn default_scenario(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| crate::batch::plan::TAPE7.to_string())
}

/// `<scenario>-<altitude>m.1km`，与输入文件同目录
fn default_output(input: &Path, scenario: &str, altitude_m: f64) -> PathBuf {
    let name = format!("{}-{:.0}m.1km", scenario, altitude_m);
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_output_name() {
        let out = default_output(Path::new("runs/tape7"), "TropicalRural", 305.0);
        assert_eq!(out, PathBuf::from("runs/TropicalRural-305m.1km"));
    }

    #[test]
    fn test_execute_rejects_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tape7");
        fs::write(&input, " FREQ DEPTH\n CM-1 -\n -9999.\n").unwrap();

        let args = NormalizeArgs {
            input,
            altitude: 1000.0,
            slant_angle: 0.0,
            points: 50,
            window: 8.0,
            scenario: None,
            output: None,
        };
        assert!(matches!(execute(args), Err(BandradError::InvalidArgument(_))));
    }

    #[test]
    fn test_execute_writes_spectrum() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tape7");
        let mut content = String::from(" FREQ DEPTH\n CM-1 -\n");
        for i in 0..200 {
            content.push_str(&format!(" {}. 0.1\n", 2000 + i));
        }
        content.push_str(" -9999.\n");
        fs::write(&input, content).unwrap();

        let args = NormalizeArgs {
            input: input.clone(),
            altitude: 1000.0,
            slant_angle: 0.0,
            points: 50,
            window: 8.0,
            scenario: Some("MidLatitudeSummer".to_string()),
            output: None,
        };
        execute(args).unwrap();

        let out = dir.path().join("MidLatitudeSummer-1000m.1km");
        let text = fs::read_to_string(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("scenario MidLatitudeSummer, altitude 1000 m"));
        assert_eq!(lines.count(), 50);
    }
}
