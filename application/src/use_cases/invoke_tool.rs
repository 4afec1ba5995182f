//! Invoke-tool use case — the per-request pipeline.
//!
//! For one decoded request: look the tool up in the registry, bind the raw
//! arguments against its schema, build the argv, run the external command,
//! and translate the raw outcome into a [`ToolResult`]. The four stages are
//! strictly sequential within an invocation; invocations never share mutable
//! state with each other.
//!
//! Every failure resolves here, at the invocation boundary: nothing is
//! retried, nothing crashes the host, and each error carries the parameter
//! name, captured stderr, or target identifier needed to act on it without
//! re-running the command.

use std::sync::Arc;
use std::time::Instant;

use dockhand_domain::{
    CommandSpec, ResultExpectation, ToolCall, ToolEntry, ToolError, ToolRegistry, ToolResult,
    bind_arguments,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::ports::command_runner::{CommandRunnerPort, ExecutionOutcome};

/// Policy knobs for result translation.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Append partial stdout to failure messages. When off, partial output
    /// is still logged at debug level so it is never silently lost.
    pub include_partial_stdout: bool,
}

/// Dispatches tool calls through bind → build → run → translate.
pub struct InvokeToolUseCase<R: CommandRunnerPort> {
    registry: Arc<ToolRegistry>,
    runner: Arc<R>,
    options: InvokeOptions,
}

impl<R: CommandRunnerPort> InvokeToolUseCase<R> {
    pub fn new(registry: Arc<ToolRegistry>, runner: Arc<R>) -> Self {
        Self {
            registry,
            runner,
            options: InvokeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InvokeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one tool invocation end to end.
    ///
    /// The cancellation token propagates into the runner: once it fires,
    /// a running child is terminated and the result is `CANCELLED`.
    pub async fn execute(&self, call: &ToolCall, cancel: &CancellationToken) -> ToolResult {
        // A name the registry does not know is a caller error; NOT_FOUND is
        // reserved for targets the wrapped binary failed to resolve.
        let Some(entry) = self.registry.get(&call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::invalid_argument(format!("unknown tool '{}'", call.tool_name)),
            );
        };

        let bound = match bind_arguments(&entry.schema, call) {
            Ok(bound) => bound,
            Err(err) => {
                debug!(tool = %call.tool_name, error = %err, "argument binding failed");
                return ToolResult::failure(
                    &call.tool_name,
                    ToolError::invalid_argument(err.to_string()),
                );
            }
        };

        let spec = (entry.build)(&bound);
        let target = entry
            .target_param
            .and_then(|param| bound.text(param))
            .map(str::to_string);
        debug!(tool = %call.tool_name, command = %spec.display(), "executing");

        let started = Instant::now();
        let outcome = self.runner.run(&spec, cancel).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        self.translate(&call.tool_name, entry, &spec, target.as_deref(), outcome)
            .with_duration(duration_ms)
    }

    /// Map a raw execution outcome to the result the transport will see.
    fn translate(
        &self,
        tool_name: &str,
        entry: &ToolEntry,
        spec: &CommandSpec,
        target: Option<&str>,
        outcome: ExecutionOutcome,
    ) -> ToolResult {
        match outcome {
            ExecutionOutcome::SpawnFailed { error } => {
                warn!(tool = %tool_name, program = %spec.program, error = %error, "spawn failed");
                ToolResult::failure(
                    tool_name,
                    ToolError::unavailable(format!(
                        "cannot start '{}' for tool '{}': {}",
                        spec.program, tool_name, error
                    )),
                )
            }

            ExecutionOutcome::WaitFailed { error } => {
                warn!(tool = %tool_name, error = %error, "exit status could not be collected");
                ToolResult::failure(
                    tool_name,
                    ToolError::execution_failed(format!(
                        "'{}' started but its exit status could not be collected: {}",
                        tool_name, error
                    )),
                )
            }

            ExecutionOutcome::Cancelled => {
                debug!(tool = %tool_name, "invocation cancelled");
                ToolResult::failure(tool_name, ToolError::cancelled(tool_name))
            }

            ExecutionOutcome::Completed {
                success: false,
                exit_code,
                stdout,
                stderr,
            } => {
                let stderr_text = String::from_utf8_lossy(&stderr);
                let mut message = match target {
                    Some(id) => format!(
                        "'{}' failed for '{}': {}",
                        tool_name,
                        id,
                        stderr_text.trim_end()
                    ),
                    None => format!("'{}' failed: {}", tool_name, stderr_text.trim_end()),
                };

                let partial = String::from_utf8_lossy(&stdout);
                if !partial.trim().is_empty() {
                    debug!(tool = %tool_name, stdout = %partial, "partial output before failure");
                    if self.options.include_partial_stdout {
                        message.push_str("\npartial output:\n");
                        message.push_str(partial.trim_end());
                    }
                }

                warn!(tool = %tool_name, exit_code, "command reported failure");
                ToolResult::failure(tool_name, ToolError::execution_failed(message))
                    .with_exit_code(exit_code)
            }

            ExecutionOutcome::Completed {
                success: true,
                exit_code,
                stdout,
                ..
            } => {
                let text = String::from_utf8_lossy(&stdout);
                if text.trim().is_empty()
                    && entry.expectation == ResultExpectation::OutputExpected
                {
                    let message = match target {
                        Some(id) => format!("'{}' did not match any target of '{}'", id, tool_name),
                        None => format!("'{}' produced no output", tool_name),
                    };
                    return ToolResult::failure(tool_name, ToolError::not_found(message))
                        .with_exit_code(exit_code);
                }

                ToolResult::success(tool_name, text.trim_end()).with_exit_code(exit_code)
            }
        }
    }
}
