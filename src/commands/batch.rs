//! # batch 命令实现
//!
//! 遍历 场景 × 高度 × 角度 目录，积分所有存在的 tape7，最后一次性写入结果存储。
//!
//! ## 功能
//! - 缺失的高度目录、非角度目录仅提示跳过
//! - rayon 并行积分，结果按定位顺序输出
//! - 单个文件失败不影响其他文件
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/`, `integration/`, `store/`, `models/atmosphere.rs`

use crate::batch::{BatchRunner, FsLocator, Located, ProcessResult, RunInput, RunLayout, RunPlan};
use crate::cli::batch::{BatchArgs, Layout};
use crate::error::{BandradError, Result};
use crate::integration::integrate_file;
use crate::models::atmosphere;
use crate::parsers::load_catalog;
use crate::store::append_results;
use crate::utils::output;

use super::report;

impl From<Layout> for RunLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Elev => RunLayout::Elevation,
            Layout::Horizontal => RunLayout::Horizontal,
        }
    }
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Band Integration");

    if !args.root.is_dir() {
        return Err(BandradError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let catalog = load_catalog(&args.ranges)?;
    report::warn_overridden(&catalog);

    let scenarios = if args.scenarios.is_empty() {
        atmosphere::standard_names()
    } else {
        args.scenarios.clone()
    };

    let locator = FsLocator;
    let plan = RunPlan::new(&locator, &args.root, args.layout.into())
        .scenarios(scenarios.clone())
        .altitudes(args.altitudes.clone())
        .file_name(args.file_name.clone());

    output::print_info(&format!(
        "Scanning {} scenario/altitude combinations under '{}' ({} layout)...",
        plan.combinations(),
        args.root.display(),
        RunLayout::from(args.layout)
    ));

    let mut inputs: Vec<RunInput> = Vec::new();
    for located in plan.inputs() {
        let located = match located {
            Ok(located) => located,
            // 单个高度目录不可读时跳过，不影响其他组合
            Err(e @ BandradError::FileReadError { .. }) => {
                output::print_skip(&e.to_string());
                continue;
            }
            Err(e) => return Err(e),
        };

        match located {
            Located::Found(input) => inputs.push(input),
            Located::Missing {
                scenario,
                altitude,
                dir,
            } => output::print_skip(&format!(
                "{} at {} m: no {} under '{}'",
                scenario,
                altitude,
                args.file_name,
                dir.display()
            )),
            Located::Unparsed { path } => output::print_skip(&format!(
                "{} (parent directory is not an angle)",
                path.display()
            )),
        }
    }

    if inputs.is_empty() {
        output::print_warning("No simulation outputs found.");
        return Ok(());
    }

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Integrating {} files over {} bands with {} jobs...",
        inputs.len(),
        catalog.len(),
        runner.jobs()
    ));

    let batch = runner.run(&inputs, |input| {
        match integrate_file(&input.path, &catalog, &input.key) {
            Ok(rows) => ProcessResult::Success(rows),
            Err(e) => ProcessResult::Failed(input.path.display().to_string(), e.to_string()),
        }
    })?;

    for (path, err) in &batch.failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    let results: Vec<_> = batch.outputs.into_iter().flatten().collect();

    output::print_separator();
    output::print_field("Files integrated", &batch.success.to_string());
    output::print_field("Files failed", &batch.failed.to_string());
    output::print_field("Rows produced", &results.len().to_string());

    for name in &scenarios {
        if let Some(desc) = atmosphere::describe(name) {
            output::print_field(name, desc);
        }
    }

    if results.is_empty() {
        output::print_warning("No results produced.");
        return Ok(());
    }

    if args.dry_run {
        report::print_results(&results, 20);
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
