//! # Data Models / 数据模型
//!
//! Test cases, the ordered suite, per-case execution results and the
//! aggregated run summary.
//!
//! 测试用例、有序测试集、每个用例的执行结果以及汇总的运行摘要。

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Which of the two tools is driving the suite.
/// 由哪个工具驱动测试集。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compare a candidate program against stored outputs.
    /// 将候选程序与已存储的输出进行比较。
    Run,
    /// Produce stored outputs from a reference program.
    /// 使用参考程序生成输出。
    Generate,
}

/// A single test case discovered on disk.
/// 在磁盘上发现的单个测试用例。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position in the suite, used for the `TEST #i/N` header.
    pub position: usize,
    /// Integer value of the filename stem, when the stem is numeric.
    pub id: Option<u128>,
    /// File name shared by the input and the expected-output file.
    pub name: String,
    /// Path of the file fed to the program's stdin.
    pub input: PathBuf,
    /// Path of the expected-output file: read by `run`, written by `generate`.
    pub output: PathBuf,
}

/// Test cases in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// File names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|case| case.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// Outcome of running the program once on one input file.
/// 在一个输入文件上运行程序一次的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The program exited with status zero. Holds its captured stdout.
    /// 程序以状态 0 退出，保存其捕获的 stdout。
    Success(Vec<u8>),
    /// The program exited non-zero or was killed by a signal.
    /// 程序以非零状态退出或被信号终止。
    RuntimeFailure { stderr: Vec<u8>, status: ExitStatus },
    /// The program exceeded the time limit and was killed.
    /// 程序超过时间限制并被终止。
    Timeout,
}

impl ExecutionResult {
    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionResult::Success(_) => "success",
            ExecutionResult::RuntimeFailure { .. } => "runtime failure",
            ExecutionResult::Timeout => "timeout",
        }
    }
}

/// Verdict of comparing a successful run against the expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    WrongAnswer,
}

/// Pass count accumulated over a `run`.
///
/// `passed` never exceeds `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    passed: usize,
    total: usize,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self { passed: 0, total }
    }

    pub fn record_pass(&mut self) {
        self.passed = (self.passed + 1).min(self.total);
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passed {}/{} tests", self.passed, self.total)
    }
}
