//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! Turns the command template and target into an invocation and runs it once
//! per test case, feeding the input file on stdin.
//!
//! 将命令模板和目标程序组合为一次调用，并为每个测试用例运行一次，
//! 通过 stdin 提供输入文件。

use std::fs::File;
use std::path::{Component, Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::{
    core::{
        config::HarnessConfig,
        error::ExecError,
        models::{ExecutionResult, TestCase},
    },
    infra::command::{self, ProcessOutcome},
};

/// A program and its arguments, ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Builds the invocation for `"{command} {target}"`.
    ///
    /// The template is split with POSIX shell quoting rules and the target is
    /// appended as the final argument, so targets containing spaces stay one
    /// word. An empty template runs the target itself, resolved against the
    /// working directory rather than `PATH`.
    pub fn from_template(command: &str, target: &str) -> Result<Self, ExecError> {
        let mut words = shlex::split(command)
            .ok_or_else(|| ExecError::InvalidCommand(command.to_string()))?;

        if words.is_empty() {
            return Ok(Self {
                program: local_program(target),
                args: Vec::new(),
            });
        }

        let program = words.remove(0);
        words.push(target.to_string());
        Ok(Self {
            program,
            args: words,
        })
    }

    /// The invocation as a single shell-quoted line, for diagnostics.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|word| shlex::try_quote(word).map_or_else(|_| word.clone(), |q| q.into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Bare file names are prefixed with `./` so the OS looks in the working
/// directory instead of searching `PATH`.
fn local_program(target: &str) -> String {
    let mut components = Path::new(target).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {
            PathBuf::from(".").join(target).to_string_lossy().into_owned()
        }
        _ => target.to_string(),
    }
}

/// Runs the target program over single input files.
///
/// The executor is built once per run and borrows each `TestCase` only for
/// the duration of one call.
#[derive(Debug, Clone)]
pub struct Executor {
    invocation: Invocation,
    timeout: Option<Duration>,
}

impl Executor {
    pub fn new(config: &HarnessConfig) -> Result<Self, ExecError> {
        let invocation = Invocation::from_template(&config.command, &config.target)?;
        debug!(command = %invocation.display(), timeout = ?config.timeout, "resolved invocation");
        Ok(Self {
            invocation,
            timeout: config.timeout,
        })
    }

    /// Runs the program once with `case.input` as its stdin.
    pub async fn execute(&self, case: &TestCase) -> Result<ExecutionResult, ExecError> {
        self.execute_input(&case.input).await
    }

    /// Runs the program once with the file at `input` bound to its stdin.
    ///
    /// The file handle lives inside the spawned command and is closed in the
    /// parent as soon as the child starts, whatever the outcome.
    pub async fn execute_input(&self, input: &Path) -> Result<ExecutionResult, ExecError> {
        let stdin = File::open(input).map_err(|source| ExecError::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;

        let mut cmd = self.invocation.to_command();
        cmd.stdin(Stdio::from(stdin));

        let start_time = Instant::now();
        let child = command::spawn_piped(cmd).map_err(|source| ExecError::Spawn {
            program: self.invocation.program.clone(),
            source,
        })?;
        let outcome = command::capture(child, self.timeout)
            .await
            .map_err(|source| ExecError::Wait {
                program: self.invocation.program.clone(),
                source,
            })?;
        let duration = start_time.elapsed();

        let result = match outcome {
            ProcessOutcome::Exited(output) if output.status.success() => {
                ExecutionResult::Success(output.stdout)
            }
            ProcessOutcome::Exited(output) => ExecutionResult::RuntimeFailure {
                stderr: output.stderr,
                status: output.status,
            },
            ProcessOutcome::TimedOut => ExecutionResult::Timeout,
        };

        debug!(
            input = %input.display(),
            outcome = result.label(),
            duration = ?duration,
            "case finished"
        );
        Ok(result)
    }
}
