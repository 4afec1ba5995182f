//! Application layer for dockhand
//!
//! Owns the per-request pipeline (bind → build → run → translate) and the
//! port abstractions the infrastructure layer implements. Each invocation is
//! an independent unit of work: the host may run any number of them
//! concurrently, since the only shared state is the read-only registry.

pub mod ports;
pub mod use_cases;

pub use ports::command_runner::{CommandRunnerPort, ExecutionOutcome};
pub use use_cases::invoke_tool::{InvokeOptions, InvokeToolUseCase};
