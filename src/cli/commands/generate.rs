//! # Generate Command Module / 生成命令模块
//!
//! Runs the reference program on every input and stores its trimmed output
//! as the expected output. No time limit applies.
//!
//! 在每个输入上运行参考程序，并将去除首尾空白后的输出保存为期望输出，不施加时间限制。

use anyhow::Result;
use tracing::debug;

use crate::{
    core::{
        config::HarnessConfig,
        execution::Executor,
        loader,
        models::{ExecutionResult, Mode},
        writer::write_expected,
    },
    reporting::console,
};

/// Executes the generate command.
///
/// A case whose program fails leaves its output file untouched.
///
/// # Returns
/// The number of output files written.
pub async fn execute(config: &HarnessConfig) -> Result<usize> {
    loader::check_target(&config.target)?;
    let suite = loader::load_suite(config, Mode::Generate)?;
    let executor = Executor::new(config)?;
    let total = suite.len();
    let mut generated = 0;

    for case in &suite {
        console::print_case_header(case.position, total);

        match executor.execute(case).await? {
            ExecutionResult::Success(stdout) => {
                write_expected(&case.output, &stdout)?;
                generated += 1;
                console::print_generated();
            }
            ExecutionResult::RuntimeFailure { stderr, status } => {
                debug!(case = %case.name, %status, "reference program failed");
                console::print_runtime_error(&stderr);
            }
            // Only reachable when a time limit is configured.
            ExecutionResult::Timeout => console::print_timeout(),
        }
    }

    console::print_done();
    debug!(generated, total, "generation finished");
    Ok(generated)
}
