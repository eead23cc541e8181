//! # integrate 命令实现
//!
//! 对单个 tape7 或目录中的 tape7 做波段积分，并追加到结果存储。
//!
//! ## 功能
//! - 单文件：角度来自 `--angle`，否则取父目录名
//! - 目录：收集 tape7，角度取每个文件的父目录名，并行积分
//! - 所有行在最后一次性追加写入
//!
//! ## 依赖关系
//! - 使用 `cli/integrate.rs` 定义的参数
//! - 使用 `parsers/ranges.rs`, `integration/`, `store/`, `batch/`

use crate::batch::plan::angle_from_path;
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::integrate::IntegrateArgs;
use crate::error::{BandradError, Result};
use crate::integration::integrate_file;
use crate::models::{IntegratedResult, RunKey};
use crate::parsers::load_catalog;
use crate::store::append_results;
use crate::utils::output;

use super::report;
use std::path::PathBuf;

/// 执行 integrate 命令
pub fn execute(args: IntegrateArgs) -> Result<()> {
    output::print_header("Band Integration");

    if !args.input.exists() {
        return Err(BandradError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let catalog = load_catalog(&args.ranges)?;
    report::warn_overridden(&catalog);
    output::print_info(&format!(
        "Loaded {} bands from '{}'",
        catalog.len(),
        args.ranges.display()
    ));

    let results = if args.input.is_file() {
        let angle = args
            .angle
            .or_else(|| angle_from_path(&args.input))
            .ok_or_else(|| {
                BandradError::InvalidArgument(format!(
                    "cannot determine the angle for '{}'; pass --angle",
                    args.input.display()
                ))
            })?;
        let key = RunKey::new(&args.scenario, args.altitude, angle);
        integrate_file(&args.input, &catalog, &key)?
    } else {
        integrate_directory(&args, &catalog)?
    };

    if results.is_empty() {
        output::print_warning("No results produced.");
        return Ok(());
    }

    report::print_results(&results, results.len());

    if args.dry_run {
        output::print_info("Dry run: result store not modified.");
        return Ok(());
    }

    let total = append_results(&results, &catalog, &args.store)?;
    output::print_done(&format!(
        "Appended {} rows to '{}' ({} rows total)",
        results.len(),
        args.store.display(),
        total
    ));

    Ok(())
}

/// 目录模式：收集并并行积分
fn integrate_directory(
    args: &IntegrateArgs,
    catalog: &crate::models::SpectralCatalog,
) -> Result<Vec<IntegratedResult>> {
    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(BandradError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    let mut inputs: Vec<(RunKey, PathBuf)> = Vec::with_capacity(files.len());
    for path in files {
        match angle_from_path(&path) {
            Some(angle) => inputs.push((RunKey::new(&args.scenario, args.altitude, angle), path)),
            None => output::print_skip(&format!(
                "{} (parent directory is not an angle)",
                path.display()
            )),
        }
    }

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Integrating {} files with {} jobs...",
        inputs.len(),
        runner.jobs()
    ));

    let batch = runner.run(&inputs, |(key, path)| {
        match integrate_file(path, catalog, key) {
            Ok(rows) => ProcessResult::Success(rows),
            Err(e) => ProcessResult::Failed(path.display().to_string(), e.to_string()),
        }
    })?;

    for (path, err) in &batch.failures {
        output::print_error(&format!("{}: {}", path, err));
    }
    output::print_info(&format!(
        "{} succeeded, {} failed",
        batch.success, batch.failed
    ));

    Ok(batch.outputs.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_store;
    use std::fs;

    const TAPE7: &str = " FREQ TOT_TRANS TOTAL_RAD TOA_SUN\n CM-1\n 3000. 0.5 0.0 1.0E-04\n 2500. 0.8 0.0 1.0E-04\n 2000. 0.5 0.0 1.0E-04\n -9999.\n";

    fn args(input: PathBuf, ranges: PathBuf, store: PathBuf) -> IntegrateArgs {
        IntegrateArgs {
            input,
            ranges,
            scenario: "TropicalRural".to_string(),
            altitude: 0.0,
            angle: None,
            store,
            pattern: "tape7".to_string(),
            recursive: true,
            jobs: 2,
            dry_run: false,
        }
    }

    #[test]
    fn test_directory_mode_reads_angles_from_parents() {
        let dir = tempfile::tempdir().unwrap();
        let runs = dir.path().join("runs");
        for angle in ["30.00", "60.00"] {
            fs::create_dir_all(runs.join(angle)).unwrap();
            fs::write(runs.join(angle).join("tape7"), TAPE7).unwrap();
        }
        let ranges = dir.path().join("ranges.txt");
        fs::write(&ranges, "MWIR 3.0 5.0\nLWIR 8.0 12.0\n").unwrap();
        let store = dir.path().join("store.csv");

        execute(args(runs, ranges, store.clone())).unwrap();

        let table = load_store(&store).unwrap();
        assert_eq!(table.rows.len(), 4);
        let mut angles: Vec<f64> = table.rows.iter().map(|r| r.zenith).collect();
        angles.dedup();
        assert_eq!(angles, vec![30.0, 60.0]);
        assert_eq!(table.ranges.len(), 2);
    }

    #[test]
    fn test_single_file_without_angle_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tape7");
        fs::write(&input, TAPE7).unwrap();
        let ranges = dir.path().join("ranges.txt");
        fs::write(&ranges, "MWIR 3.0 5.0\n").unwrap();
        let store = dir.path().join("store.csv");

        // tempdir 名称不是角度
        let err = execute(args(input, ranges, store.clone())).unwrap_err();
        assert!(matches!(err, BandradError::InvalidArgument(_)));
        assert!(!store.exists());
    }

    #[test]
    fn test_dry_run_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tape7");
        fs::write(&input, TAPE7).unwrap();
        let ranges = dir.path().join("ranges.txt");
        fs::write(&ranges, "MWIR 3.0 5.0\n").unwrap();
        let store = dir.path().join("store.csv");

        let mut a = args(input, ranges, store.clone());
        a.angle = Some(45.0);
        a.dry_run = true;
        execute(a).unwrap();

        assert!(!store.exists());
    }
}
