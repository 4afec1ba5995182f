//! Tool invocation requests

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A decoded tool invocation as received from the transport.
///
/// Argument values are raw and untyped at this point: the binder is
/// responsible for checking them against the tool's schema. One `ToolCall`
/// exists per request and never outlives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to invoke
    #[serde(alias = "tool")]
    pub tool_name: String,
    /// Raw arguments (string or boolean values)
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a raw argument value.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.arguments.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_call_builder() {
        let call = ToolCall::new("docker_inspect").with_arg("containerID", "abc123");

        assert_eq!(call.tool_name, "docker_inspect");
        assert_eq!(call.get("containerID").and_then(|v| v.as_str()), Some("abc123"));
        assert!(call.get("missing").is_none());
    }

    #[test]
    fn test_deserialize_transport_shape() {
        let call: ToolCall =
            serde_json::from_str(r#"{"tool":"docker_ps","arguments":{"all":true}}"#).unwrap();

        assert_eq!(call.tool_name, "docker_ps");
        assert_eq!(call.get("all"), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_deserialize_without_arguments() {
        let call: ToolCall = serde_json::from_str(r#"{"tool_name":"docker_image_list"}"#).unwrap();

        assert_eq!(call.tool_name, "docker_image_list");
        assert!(call.arguments.is_empty());
    }
}
