//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the tester:
//! data models, configuration, suite discovery, process execution,
//! output comparison and expected-output writing.
//!
//! 此模块包含测试工具的核心功能，
//! 包括数据模型、配置、测试集发现、进程执行、输出比较和期望输出写入。

pub mod compare;
pub mod config;
pub mod error;
pub mod execution;
pub mod loader;
pub mod models;
pub mod writer;

// Re-exports
pub use config::{HarnessConfig, Settings};
pub use error::{ExecError, LoadError};
pub use execution::Executor;
pub use models::{ExecutionResult, Mode, RunSummary, TestCase, TestSuite};
