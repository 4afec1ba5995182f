//! Configuration file loading for dockhand
//!
//! File I/O and merging of configuration from multiple sources. Priority
//! order (highest to lowest):
//!
//! 1. `DOCKHAND_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./dockhand.toml` or `./.dockhand.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dockhand/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ExecutionConfig, FileConfig, ResultsConfig};
pub use loader::ConfigLoader;
