//! Raw TOML configuration data types

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Process execution settings
    pub execution: ExecutionConfig,
    /// Result translation settings
    pub results: ResultsConfig,
}

/// `[execution]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Wall-clock limit per command, in seconds. Absent means unlimited.
    pub timeout_secs: Option<u64>,
}

/// `[results]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    /// Append partial stdout to failure messages. Off by default because
    /// failure output from wrapped CLIs can be large.
    pub include_partial_stdout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.execution.timeout_secs.is_none());
        assert!(!config.results.include_partial_stdout);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str("[execution]\ntimeout_secs = 120\n").unwrap();
        assert_eq!(config.execution.timeout_secs, Some(120));
        assert!(!config.results.include_partial_stdout);
    }

    #[test]
    fn test_full_toml() {
        let config: FileConfig = toml::from_str(
            "[execution]\ntimeout_secs = 30\n\n[results]\ninclude_partial_stdout = true\n",
        )
        .unwrap();
        assert_eq!(config.execution.timeout_secs, Some(30));
        assert!(config.results.include_partial_stdout);
    }
}
