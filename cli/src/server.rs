//! Line-delimited JSON transport over stdio.
//!
//! One request per input line, one [`ToolResult`] per output line. Requests
//! run concurrently on their own tasks; responses are serialized through a
//! single writer task so concurrent completions never interleave bytes on
//! stdout. Ctrl-C fires the shared cancellation token, which terminates
//! in-flight child processes before the loop exits.

use std::sync::Arc;

use anyhow::{Context, Result};
use dockhand_application::{CommandRunnerPort, InvokeToolUseCase};
use dockhand_domain::{ToolCall, ToolError, ToolResult};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Serve tool invocations over stdin/stdout until EOF or Ctrl-C.
pub async fn serve_stdio<R>(use_case: Arc<InvokeToolUseCase<R>>) -> Result<()>
where
    R: CommandRunnerPort + 'static,
{
    let cancel = CancellationToken::new();
    let (tx, rx) = mpsc::channel::<ToolResult>(64);
    let writer = tokio::spawn(write_responses(rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!(tools = use_case.registry().len(), "serving on stdio");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("reading request line")?,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                cancel.cancel();
                break;
            }
        };

        let Some(line) = line else {
            debug!("stdin closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let call: ToolCall = match serde_json::from_str(&line) {
            Ok(call) => call,
            Err(err) => {
                // A reply per line, even for garbage, keeps the caller's
                // request/response pairing intact.
                let result = ToolResult::failure(
                    "unknown",
                    ToolError::invalid_argument(format!("malformed request: {err}")),
                );
                if tx.send(result).await.is_err() {
                    break;
                }
                continue;
            }
        };

        let use_case = Arc::clone(&use_case);
        let cancel = cancel.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute(&call, &cancel).await;
            let _ = tx.send(result).await;
        });
    }

    // Dropping our sender lets the writer drain in-flight responses and stop.
    drop(tx);
    writer.await.context("response writer task")??;
    Ok(())
}

async fn write_responses(mut rx: mpsc::Receiver<ToolResult>) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    while let Some(result) = rx.recv().await {
        let line = match serde_json::to_string(&result) {
            Ok(line) => line,
            Err(err) => {
                error!(tool = %result.tool_name, error = %err, "failed to encode result");
                continue;
            }
        };
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }
    Ok(())
}
