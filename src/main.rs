//! # bandrad - MODTRAN 波段积分辐射度工具
//!
//! 将 MODTRAN tape7 输出在指定波段内积分，得到大气顶/底太阳辐照度、
//! 程辐射和有效透过率，并累积到结果存储中。
//!
//! ## 子命令
//! - `integrate` - 单文件/目录波段积分
//! - `batch`     - 场景 × 高度 × 角度 批量积分
//! - `normalize` - 1 km 归一化透过率
//! - `bands`     - 查看波段目录
//! - `show`      - 查看结果存储
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     ├── batch/       (输入定位与并行执行)
//!   │     ├── integration/ (波段积分、1 km 归一化)
//!   │     ├── parsers/     (tape7、波段目录解析)
//!   │     ├── physics/     (常数、单位换算、Planck)
//!   │     ├── store/       (结果存储)
//!   │     └── models/      (数据模型)
//!   ├── utils/        (工具函数)
//!   └── error.rs      (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod integration;
mod models;
mod parsers;
mod physics;
mod store;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
