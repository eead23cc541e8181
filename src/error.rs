//! # 统一错误处理模块
//!
//! 定义 bandrad 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bandrad 统一错误类型
#[derive(Error, Debug)]
pub enum BandradError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed spectral range catalog {path}, line {line}\nReason: {reason}")]
    MalformedCatalog {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Column '{column}' not found in header of {path}")]
    MissingColumn { path: String, column: String },

    #[error("Malformed data row in {path}, line {line}\nReason: {reason}")]
    MalformedRow {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 结果存储错误
    // ─────────────────────────────────────────────────────────────
    #[error("Schema mismatch in section [{section}] of {path}\nExpected: {expected}\nFound:    {found}")]
    SchemaMismatch {
        path: String,
        section: String,
        expected: String,
        found: String,
    },

    #[error("Invalid band '{band}' in section [{section}] of {path}\nReason: {reason}")]
    InvalidStoredBand {
        path: String,
        section: String,
        band: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BandradError>;
