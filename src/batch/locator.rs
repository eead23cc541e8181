//! # 输入定位接口
//!
//! 批处理通过该接口查询文件是否存在、按 glob 模式列出文件，
//! 与数值核心解耦，测试中可替换为内存实现。
//!
//! ## 依赖关系
//! - 被 `batch/plan.rs` 使用
//! - 使用 `glob` 进行模式匹配

use crate::error::{BandradError, Result};
use std::path::{Path, PathBuf};

/// 文件系统查询能力
pub trait InputLocator {
    /// 路径是否存在
    fn exists(&self, path: &Path) -> bool;

    /// 列出匹配 glob 模式的路径（字典序）
    ///
    /// 遍历中无法读取的目录报 `FileReadError`，不静默忽略。
    fn list(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// 基于本地文件系统的实现
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLocator;

impl InputLocator for FsLocator {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let paths = glob::glob(pattern).map_err(|e| BandradError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let mut found = paths
            .collect::<std::result::Result<Vec<PathBuf>, glob::GlobError>>()
            .map_err(|e| BandradError::FileReadError {
                path: e.path().display().to_string(),
                source: e.into_error(),
            })?;
        found.sort();
        Ok(found)
    }
}

/// 转义路径中的 glob 元字符
pub fn escape_path(path: &Path) -> String {
    glob::Pattern::escape(&path.to_string_lossy())
}
