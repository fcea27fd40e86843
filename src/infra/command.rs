//! # Command Execution Module / 命令执行模块
//!
//! Spawns a child process, drains its stdout and stderr into memory and waits
//! for it, optionally under a wall-clock limit.
//!
//! 派生子进程，将其 stdout 和 stderr 读入内存并等待其结束，可选地施加时间限制。

use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::debug;

/// How a captured child process ended.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The child exited on its own. Holds its status and both streams.
    Exited(Output),
    /// The child outlived the limit and was killed and reaped.
    TimedOut,
}

/// Spawns a command with stdout and stderr piped.
///
/// The command is consumed: once the child is running, the parent's copies of
/// any handles configured on it (such as a file bound to stdin) are released.
///
/// 派生一个 stdout 和 stderr 均为管道的命令。
/// 子进程启动后，父进程持有的句柄（例如绑定到 stdin 的文件）会被释放。
pub fn spawn_piped(mut cmd: Command) -> io::Result<Child> {
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
}

/// Captures a child's stdout and stderr separately and waits for it.
///
/// With a `limit`, the child is killed and reaped when it has not finished
/// exiting and closing its streams within that time.
///
/// # Arguments
/// * `child` - A child spawned by [`spawn_piped`].
/// * `limit` - Optional wall-clock limit.
///
/// # Returns
/// The `ProcessOutcome`, or the I/O error raised while collecting the child.
///
/// 分别捕获子进程的 stdout 和 stderr 并等待其结束。
/// 如果设置了 `limit`，超时的子进程会被终止并回收。
pub async fn capture(mut child: Child, limit: Option<Duration>) -> io::Result<ProcessOutcome> {
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("Failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("Failed to capture stderr"))?;

    // Both pipes are drained while waiting, so a chatty child cannot block on
    // a full pipe buffer.
    let collect = async {
        let (status, stdout, stderr) =
            tokio::try_join!(child.wait(), read_stream(stdout), read_stream(stderr))?;
        Ok::<_, io::Error>(Output {
            status,
            stdout,
            stderr,
        })
    };

    let finished = match limit {
        Some(limit) => tokio::time::timeout(limit, collect).await.ok(),
        None => Some(collect.await),
    };

    match finished {
        Some(output) => Ok(ProcessOutcome::Exited(output?)),
        None => {
            // The child may already have exited while a grandchild keeps the
            // pipes open; killing an exited child is not an error here.
            if let Err(e) = child.start_kill() {
                debug!(error = %e, "child already exited before kill");
            }
            child.wait().await?;
            Ok(ProcessOutcome::TimedOut)
        }
    }
}

async fn read_stream<R: AsyncRead + Unpin>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}
