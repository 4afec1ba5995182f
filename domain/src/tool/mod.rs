//! Tool domain model
//!
//! Schemas declare what a tool accepts, the binder turns raw request
//! arguments into a validated set, and command construction turns that set
//! into an argv ready for process creation. All of it is pure and
//! deterministic: binding and building the same call twice yields identical
//! results.

pub mod binder;
pub mod call;
pub mod command;
pub mod registry;
pub mod result;
pub mod schema;
pub mod shell;
