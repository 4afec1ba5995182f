//! Command runner port
//!
//! Defines how the application layer executes external commands. The
//! concrete adapter (tokio process spawning) lives in the infrastructure
//! layer.

use async_trait::async_trait;
use dockhand_domain::CommandSpec;
use tokio_util::sync::CancellationToken;

/// Raw outcome of one external command execution.
///
/// Owned by the runner until the use case translates it into a
/// [`ToolResult`](dockhand_domain::ToolResult); nothing here crosses the
/// transport boundary directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The process ran to completion, successfully or not. Stdout and
    /// stderr are captured independently, and partial output produced
    /// before a failure is preserved.
    Completed {
        success: bool,
        exit_code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
    /// The process could not be started (binary missing, permission denied).
    SpawnFailed { error: String },
    /// The process started but its exit status could not be collected.
    WaitFailed { error: String },
    /// The cancellation signal fired before the process finished.
    Cancelled,
}

/// Port for executing resolved commands.
#[async_trait]
pub trait CommandRunnerPort: Send + Sync {
    /// Execute the command, capturing stdout and stderr separately.
    ///
    /// Implementations must pass the argv tokens directly to process
    /// creation — never concatenated into a shell command line — and must
    /// not leave a running child behind on any exit path, cancellation
    /// included.
    async fn run(&self, spec: &CommandSpec, cancel: &CancellationToken) -> ExecutionOutcome;
}
