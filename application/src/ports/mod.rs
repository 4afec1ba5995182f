//! Ports — interfaces implemented by the infrastructure layer

pub mod command_runner;
