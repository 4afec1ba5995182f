//! Use cases — one per application-level operation

pub mod invoke_tool;
