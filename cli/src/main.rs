//! CLI entrypoint for dockhand
//!
//! Wires the layers together with dependency injection: the tool catalog
//! and process runner from the infrastructure layer feed the invoke-tool
//! use case, which the stdio server dispatches requests through.

mod server;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dockhand_application::{InvokeOptions, InvokeToolUseCase};
use dockhand_infrastructure::{ConfigLoader, ProcessCommandRunner, default_registry};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dockhand", version, about = "Tool bridge for docker and trivy")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a config file (overrides discovered configs)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip config discovery and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Per-command timeout in seconds (overrides config)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the tool catalog as JSON and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries responses; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let registry = Arc::new(default_registry());

    if cli.list_tools {
        let mut schemas: Vec<_> = registry.schemas().collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let timeout_secs = cli.timeout_secs.or(config.execution.timeout_secs);
    let mut runner = ProcessCommandRunner::new();
    if let Some(secs) = timeout_secs {
        runner = runner.with_timeout(Duration::from_secs(secs));
    }

    let use_case = Arc::new(
        InvokeToolUseCase::new(registry, Arc::new(runner)).with_options(InvokeOptions {
            include_partial_stdout: config.results.include_partial_stdout,
        }),
    );

    info!(timeout_secs, "dockhand starting");
    server::serve_stdio(use_case).await
}
