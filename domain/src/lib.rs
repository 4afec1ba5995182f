//! Domain layer for dockhand
//!
//! This crate contains the pure core of the tool-dispatch bridge: parameter
//! schemas, argument binding, command-line construction, and the result value
//! objects. It performs no I/O and has no dependency on the infrastructure
//! or transport layers.
//!
//! # Pipeline
//!
//! Every tool invocation flows through four stages; the first two live here:
//!
//! ```text
//! ToolCall ──bind──▶ BoundArguments ──build──▶ CommandSpec ──run──▶ ToolResult
//! ```
//!
//! The only long-lived value is the [`ToolRegistry`], populated once at
//! startup and read-only afterwards; everything else is transient per
//! invocation.

pub mod tool;

// Re-export commonly used types
pub use tool::{
    binder::{BindError, BoundArguments, BoundValue, bind_arguments},
    call::ToolCall,
    command::CommandSpec,
    registry::{CommandBuilder, ResultExpectation, ToolEntry, ToolRegistry},
    result::{ToolError, ToolResult, ToolResultMetadata},
    schema::{ParamKind, ParameterSpec, ToolSchema},
    shell::{CommandText, DEFAULT_SHELL, has_shell_metacharacters},
};
