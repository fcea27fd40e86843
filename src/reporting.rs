//! # Reporting Module / 报告模块
//!
//! This module prints per-case verdicts and the final summary to the console.
//! The wording of every line is part of the tool's interface.
//!
//! 此模块在控制台打印每个用例的结果和最终摘要，每一行的措辞都属于工具的接口。

pub mod console;

// Re-export common reporting functions
pub use console::{print_case_header, print_run_summary, print_warning};
