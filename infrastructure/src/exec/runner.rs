//! Tokio-based process runner.
//!
//! [`ProcessCommandRunner`] spawns the built argv directly (no shell in
//! between), drains stdout and stderr concurrently so a chatty child can
//! never deadlock on a full pipe, and races completion against cancellation
//! and the optional wall-clock timeout. A cancelled or timed-out child is
//! killed and reaped before the outcome is returned; no zombie survives an
//! invocation.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use dockhand_application::{CommandRunnerPort, ExecutionOutcome};
use dockhand_domain::CommandSpec;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Runs commands as local child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner {
    /// Wall-clock limit per invocation. `None` means no limit.
    timeout: Option<Duration>,
}

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl CommandRunnerPort for ProcessCommandRunner {
    async fn run(&self, spec: &CommandSpec, cancel: &CancellationToken) -> ExecutionOutcome {
        let mut child = match spawn(spec) {
            Ok(child) => child,
            Err(err) => {
                return ExecutionOutcome::SpawnFailed {
                    error: err.to_string(),
                };
            }
        };

        // Pipes are drained on their own tasks; a child that fills one while
        // we only await the other would otherwise block forever.
        let stdout_task = drain(child.stdout.take());
        let stderr_task = drain(child.stderr.take());

        let status = tokio::select! {
            status = child.wait() => status,
            _ = cancel.cancelled() => {
                debug!(program = %spec.program, "cancellation requested, killing child");
                return terminate(child, stdout_task, stderr_task).await;
            }
            _ = deadline(self.timeout) => {
                warn!(program = %spec.program, timeout = ?self.timeout, "command timed out");
                return terminate(child, stdout_task, stderr_task).await;
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        match status {
            Ok(status) => ExecutionOutcome::Completed {
                success: status.success(),
                exit_code: status.code(),
                stdout,
                stderr,
            },
            // The process did start; losing its status is not a spawn error.
            Err(err) => ExecutionOutcome::WaitFailed {
                error: err.to_string(),
            },
        }
    }
}

fn spawn(spec: &CommandSpec) -> std::io::Result<Child> {
    Command::new(&spec.program)
        .args(&spec.argv)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
}

/// Read a pipe to EOF on a separate task.
fn drain<R>(pipe: Option<R>) -> tokio::task::JoinHandle<Vec<u8>>
where
    R: AsyncReadExt + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf).await;
        }
        buf
    })
}

/// Sleep until the timeout elapses, or forever when there is none.
async fn deadline(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending().await,
    }
}

/// Kill and reap a child, then discard whatever the pipes held.
async fn terminate(
    mut child: Child,
    stdout_task: tokio::task::JoinHandle<Vec<u8>>,
    stderr_task: tokio::task::JoinHandle<Vec<u8>>,
) -> ExecutionOutcome {
    if let Err(err) = child.start_kill() {
        warn!(error = %err, "failed to kill child process");
    }
    let _ = child.wait().await;
    let _ = stdout_task.await;
    let _ = stderr_task.await;
    ExecutionOutcome::Cancelled
}
