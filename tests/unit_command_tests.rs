//! # Execution Unit Tests / 执行单元测试
//!
//! Invocation building, process capture and the executor's three outcomes.
//! Process-based tests drive `/bin/sh` and only run on Unix.
//!
//! 调用构建、进程捕获以及执行器的三种结果。

use stdio_tester::core::execution::Invocation;
use stdio_tester::error::ExecError;

#[cfg(test)]
mod invocation_tests {
    use super::*;

    #[test]
    fn test_empty_template_runs_target_from_working_directory() {
        let invocation = Invocation::from_template("", "main.exe").unwrap();
        assert_eq!(invocation.program, std::path::Path::new(".").join("main.exe").to_string_lossy());
        assert!(invocation.args.is_empty());
    }

    #[test]
    fn test_whitespace_template_counts_as_empty() {
        let invocation = Invocation::from_template("   ", "main").unwrap();
        assert!(invocation.args.is_empty());
    }

    #[test]
    fn test_target_with_directory_is_used_as_is() {
        let invocation = Invocation::from_template("", "/opt/bin/solver").unwrap();
        assert_eq!(invocation.program, "/opt/bin/solver");
    }

    #[test]
    fn test_interpreter_template_prefixes_target() {
        let invocation = Invocation::from_template("python3", "main.py").unwrap();
        assert_eq!(invocation.program, "python3");
        assert_eq!(invocation.args, vec!["main.py".to_string()]);
        assert_eq!(invocation.display(), "python3 main.py");
    }

    #[test]
    fn test_template_is_split_with_shell_quoting() {
        let invocation = Invocation::from_template("java -cp '.:lib dir'", "Main").unwrap();
        assert_eq!(invocation.program, "java");
        assert_eq!(invocation.args, vec!["-cp", ".:lib dir", "Main"]);
        assert!(invocation.display().starts_with("java -cp "));
    }

    #[test]
    fn test_unbalanced_quotes_are_rejected() {
        let err = Invocation::from_template("python3 'oops", "main.py").unwrap_err();
        assert!(matches!(err, ExecError::InvalidCommand(_)));
    }
}

#[cfg(all(test, unix))]
mod process_tests {
    use std::fs;
    use std::time::{Duration, Instant};
    use stdio_tester::config::{HarnessConfig, Settings};
    use stdio_tester::core::execution::Executor;
    use stdio_tester::error::ExecError;
    use stdio_tester::infra::command::{ProcessOutcome, capture, spawn_piped};
    use stdio_tester::models::ExecutionResult;
    use tempfile::TempDir;
    use tokio::process::Command;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    async fn spawn_and_capture(cmd: Command, limit: Option<Duration>) -> std::io::Result<ProcessOutcome> {
        capture(spawn_piped(cmd)?, limit).await
    }

    /// Writes `body` as a script plus an input file and returns an executor
    /// running `sh <script>` with the given limit.
    fn executor_for(temp_dir: &TempDir, body: &str, limit: Option<u64>) -> Executor {
        let script = temp_dir.path().join("prog.sh");
        fs::write(&script, body).unwrap();
        let target = script.to_string_lossy().into_owned();
        let config = match limit {
            Some(secs) => HarnessConfig::for_run("sh", target, temp_dir.path(), Some(secs), Settings::default()),
            None => HarnessConfig::for_generate("sh", target, temp_dir.path(), Settings::default()),
        };
        Executor::new(&config).unwrap()
    }

    fn write_input(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp_dir.path().join("1.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_captures_stdout_and_stderr_separately() {
        let outcome = spawn_and_capture(sh("printf out; printf err >&2"), None).await.unwrap();
        match outcome {
            ProcessOutcome::Exited(output) => {
                assert!(output.status.success());
                assert_eq!(output.stdout, b"out");
                assert_eq!(output.stderr, b"err");
            }
            ProcessOutcome::TimedOut => panic!("unexpected timeout"),
        }
    }

    #[tokio::test]
    async fn test_large_output_does_not_block() {
        let outcome = spawn_and_capture(
            sh("head -c 1000000 /dev/zero; head -c 200000 /dev/zero >&2"),
            Some(Duration::from_secs(10)),
        )
        .await
        .unwrap();
        match outcome {
            ProcessOutcome::Exited(output) => {
                assert_eq!(output.stdout.len(), 1_000_000);
                assert_eq!(output.stderr.len(), 200_000);
            }
            ProcessOutcome::TimedOut => panic!("unexpected timeout"),
        }
    }

    #[tokio::test]
    async fn test_slow_child_is_killed_at_the_limit() {
        let start = Instant::now();
        let outcome = spawn_and_capture(sh("sleep 5"), Some(Duration::from_millis(200)))
            .await
            .unwrap();
        assert!(matches!(outcome, ProcessOutcome::TimedOut));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_success_returns_stdout_of_stdin_echo() {
        let temp_dir = TempDir::new().unwrap();
        let executor = executor_for(&temp_dir, "cat\n", Some(1));
        let input = write_input(&temp_dir, "hello\n");

        let result = executor.execute_input(&input).await.unwrap();
        assert_eq!(result, ExecutionResult::Success(b"hello\n".to_vec()));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_runtime_failure() {
        let temp_dir = TempDir::new().unwrap();
        let executor = executor_for(&temp_dir, "echo partial\necho boom >&2\nexit 3\n", Some(1));
        let input = write_input(&temp_dir, "");

        match executor.execute_input(&input).await.unwrap() {
            ExecutionResult::RuntimeFailure { stderr, status } => {
                assert_eq!(stderr, b"boom\n");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sleeping_program_times_out() {
        let temp_dir = TempDir::new().unwrap();
        let executor = executor_for(&temp_dir, "sleep 5\n", Some(1));
        let input = write_input(&temp_dir, "");

        let start = Instant::now();
        let result = executor.execute_input(&input).await.unwrap();
        assert_eq!(result, ExecutionResult::Timeout);
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_no_limit_waits_for_slow_program() {
        let temp_dir = TempDir::new().unwrap();
        let executor = executor_for(&temp_dir, "sleep 1\necho late\n", None);
        let input = write_input(&temp_dir, "");

        let result = executor.execute_input(&input).await.unwrap();
        assert_eq!(result, ExecutionResult::Success(b"late\n".to_vec()));
    }

    #[tokio::test]
    async fn test_missing_input_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let executor = executor_for(&temp_dir, "cat\n", Some(1));

        let err = executor
            .execute_input(&temp_dir.path().join("missing.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecError::OpenInput { .. }));
    }

    #[tokio::test]
    async fn test_unknown_program_is_a_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = HarnessConfig::for_run(
            "this_command_definitely_does_not_exist_12345",
            "main",
            temp_dir.path(),
            None,
            Settings::default(),
        );
        let executor = Executor::new(&config).unwrap();
        let input = write_input(&temp_dir, "");

        let err = executor.execute_input(&input).await.unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }
}
