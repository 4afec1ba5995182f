//! Infrastructure layer for dockhand
//!
//! Concrete adapters behind the application layer's ports: the docker/trivy
//! tool catalog, the tokio-based process runner, and file/environment
//! configuration.

pub mod config;
pub mod exec;
pub mod tools;

pub use config::{ConfigLoader, FileConfig};
pub use exec::ProcessCommandRunner;
pub use tools::default_registry;
