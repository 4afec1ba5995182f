//! Process execution — the tokio-backed command runner adapter

pub mod runner;

pub use runner::ProcessCommandRunner;
