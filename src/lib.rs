//! # Stdio Tester Library / Stdio Tester 库
//!
//! This library provides the core functionality for the `stdio-tester` tool,
//! a black-box harness that drives arbitrary programs through their standard
//! streams. It ships two commands sharing the same discovery and execution
//! engine:
//!
//! - `generate` runs a trusted reference program over every input file and
//!   stores its output as the expected answer.
//! - `run` runs a candidate program over the same inputs and checks its output
//!   against the stored answers.
//!
//! 此库为 `stdio-tester` 工具提供核心功能，
//! 这是一个通过标准输入输出驱动任意程序的黑盒测试工具。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, suite loading, execution and comparison
//! - `infra` - Process spawning and file system helpers
//! - `reporting` - Console output of per-case verdicts and summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、配置、测试集加载、执行与比较
//! - `infra` - 进程派生和文件系统辅助函数
//! - `reporting` - 控制台输出每个用例的结果与摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::error;
pub use crate::core::models;
