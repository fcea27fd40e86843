//! # Error Types / 错误类型
//!
//! Typed failures for suite loading and program execution. The CLI layer
//! carries them through `anyhow` and turns them into process exit codes.
//!
//! 测试集加载和程序执行的类型化错误。
//! CLI 层通过 `anyhow` 传递它们，并将其映射为进程退出码。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for failures that have no dedicated code.
pub const EXIT_GENERIC_FAILURE: u8 = 1;
/// Exit code for a target program that is not present in the working directory.
pub const EXIT_MISSING_TARGET: u8 = 3;
/// Exit code for a tests directory with missing or empty subdirectories.
pub const EXIT_BAD_LAYOUT: u8 = 4;
/// Exit code for input and output sets that do not line up.
pub const EXIT_INCONSISTENT_SUITE: u8 = 5;

/// Fatal problems found while validating the target and discovering the suite.
/// Every variant aborts the whole run before any test case is executed.
///
/// 验证目标程序和发现测试集时发现的致命问题。
/// 每个变体都会在执行任何测试用例之前中止整个运行。
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {0} does not exist")]
    MissingTarget(String),

    #[error("Directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Directory {} is empty", .0.display())]
    EmptyDirectory(PathBuf),

    #[error(
        "Directories {} and {} contain different amount of files ({} vs {})",
        .input_dir.display(),
        .output_dir.display(),
        .inputs,
        .outputs
    )]
    CountMismatch {
        input_dir: PathBuf,
        output_dir: PathBuf,
        inputs: usize,
        outputs: usize,
    },

    #[error("Input test filename {input} does not correspond to {output}")]
    NameMismatch { input: String, output: String },

    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Maps the error kind to the exit code reported by the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::MissingTarget(_) => EXIT_MISSING_TARGET,
            LoadError::MissingDirectory(_) | LoadError::EmptyDirectory(_) => EXIT_BAD_LAYOUT,
            LoadError::CountMismatch { .. } | LoadError::NameMismatch { .. } => {
                EXIT_INCONSISTENT_SUITE
            }
            LoadError::Io { .. } => EXIT_GENERIC_FAILURE,
        }
    }
}

/// Failures of the harness itself while invoking a program.
///
/// A program that runs and exits non-zero, or that times out, is not an
/// `ExecError`: those are ordinary [`ExecutionResult`](crate::models::ExecutionResult)s.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to parse command template: {0:?}")]
    InvalidCommand(String),

    #[error("Failed to open input file {}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to collect the result of `{program}`")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}
