//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the per-case blocks and the closing summary, colored when stdout is
//! a terminal.
//!
//! 打印每个用例的输出块和最后的摘要，当 stdout 为终端时使用彩色输出。
//!
//! # Output Format / 输出格式
//! ```text
//! --------------------------------------
//! TEST #1/3:
//! Correct
//! --------------------------------------
//! TEST #2/3:
//! Runtime Error:
//! boom
//! --------------------------------------
//! TEST #3/3:
//! Timeout Error
//! --------------------------------------
//! Passed 1/3 tests
//! ```

use colored::*;

use crate::core::models::{RunSummary, Verdict};

/// Line printed before every case and before the summary.
pub const SEPARATOR: &str = "--------------------------------------";

/// Formats the `TEST #i/N:` header of a case.
pub fn case_header(position: usize, total: usize) -> String {
    format!("TEST #{position}/{total}:")
}

pub fn print_separator() {
    println!("{SEPARATOR}");
}

/// Prints the separator and the header opening a case block.
pub fn print_case_header(position: usize, total: usize) {
    print_separator();
    println!("{}", case_header(position, total));
}

pub fn print_verdict(verdict: Verdict) {
    match verdict {
        Verdict::Correct => println!("{}", "Correct".green()),
        Verdict::WrongAnswer => println!("{}", "Wrong answer".red()),
    }
}

/// Prints a failed run followed by what the program wrote to stderr.
pub fn print_runtime_error(stderr: &[u8]) {
    println!("{}", "Runtime Error:".red());
    println!("{}", String::from_utf8_lossy(stderr).trim());
}

pub fn print_timeout() {
    println!("{}", "Timeout Error".yellow());
}

pub fn print_generated() {
    println!("{}", "Generated".green());
}

/// Prints the closing separator and `Passed X/N tests`.
pub fn print_run_summary(summary: &RunSummary) {
    print_separator();
    let line = summary.to_string();
    if summary.all_passed() {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.bold());
    }
}

/// Prints the closing separator and `Done`.
pub fn print_done() {
    print_separator();
    println!("{}", "Done".bold());
}

/// Prints a non-fatal problem that lets the run continue.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow(), message);
}
