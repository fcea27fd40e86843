//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which executes the candidate
//! program on every test case in order and compares its output with the
//! expected output.
//!
//! 此模块实现了 `run` 命令，按顺序在每个测试用例上执行候选程序，
//! 并将其输出与期望输出进行比较。

use anyhow::Result;
use tracing::debug;

use crate::{
    core::{
        compare::{compare, read_expected},
        config::HarnessConfig,
        execution::Executor,
        loader,
        models::{ExecutionResult, Mode, RunSummary, Verdict},
    },
    reporting::console,
};

/// Executes the run command.
///
/// Fatal problems (missing target, bad suite layout, mismatched inputs and
/// outputs, a program that cannot be started) abort before the summary is
/// printed. Runtime errors, timeouts and wrong answers only fail their case.
///
/// # Returns
/// The `RunSummary` printed as the last line.
pub async fn execute(config: &HarnessConfig) -> Result<RunSummary> {
    loader::check_target(&config.target)?;
    let suite = loader::load_suite(config, Mode::Run)?;
    let executor = Executor::new(config)?;
    let total = suite.len();
    let mut summary = RunSummary::new(total);

    for case in &suite {
        console::print_case_header(case.position, total);

        match executor.execute(case).await? {
            ExecutionResult::Success(stdout) => {
                let expected = read_expected(&case.output)?;
                let verdict = compare(&stdout, &expected);
                if verdict == Verdict::Correct {
                    summary.record_pass();
                }
                console::print_verdict(verdict);
            }
            ExecutionResult::RuntimeFailure { stderr, status } => {
                debug!(case = %case.name, %status, "program failed");
                console::print_runtime_error(&stderr);
            }
            ExecutionResult::Timeout => console::print_timeout(),
        }
    }

    console::print_run_summary(&summary);
    Ok(summary)
}
