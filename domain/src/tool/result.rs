//! Tool result value objects
//!
//! A [`ToolResult`] is the only value that crosses back to the transport
//! layer: either a single text payload or a classified error. Error codes
//! form the invocation-level taxonomy — every failure resolves at the
//! invocation boundary, is attributable to one request, and surfaces as one
//! descriptive message, never a raw backtrace or signal number.

use serde::{Deserialize, Serialize};

/// Error produced by a failed tool invocation.
///
/// | Code | Meaning |
/// |------|---------|
/// | `INVALID_ARGUMENT` | Caller supplied malformed or incomplete arguments |
/// | `UNAVAILABLE` | The wrapped binary could not be started |
/// | `EXECUTION_FAILED` | The binary ran and reported failure (stderr attached) |
/// | `NOT_FOUND` | The binary succeeded but the target did not resolve |
/// | `CANCELLED` | The invocation's cancellation signal fired first |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g. "EXECUTION_FAILED")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new("UNAVAILABLE", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn cancelled(operation: impl Into<String>) -> Self {
        Self::new("CANCELLED", format!("operation cancelled: {}", operation.into()))
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Outcome of one tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was invoked
    pub tool_name: String,
    /// Whether the invocation succeeded
    pub success: bool,
    /// Captured output, trailing whitespace trimmed (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Classified error (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Execution metadata
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Wall-clock duration of the external command in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Exit code of the external command, when it ran to completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_exit_code(mut self, exit_code: Option<i32>) -> Self {
        self.metadata.exit_code = exit_code;
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let result = ToolResult::success("docker_ps", "CONTAINER ID  IMAGE").with_duration(12);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("CONTAINER ID  IMAGE"));
        assert!(result.error().is_none());
        assert_eq!(result.metadata.duration_ms, Some(12));
    }

    #[test]
    fn test_failure_result() {
        let result = ToolResult::failure(
            "docker_pull",
            ToolError::execution_failed("manifest unknown"),
        )
        .with_exit_code(Some(1));

        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(result.error().unwrap().code, "EXECUTION_FAILED");
        assert_eq!(result.metadata.exit_code, Some(1));
    }

    #[test]
    fn test_error_display() {
        let err = ToolError::not_found("no image 'abc'");
        assert_eq!(err.to_string(), "[NOT_FOUND] no image 'abc'");
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&ToolResult::success("t", "out")).unwrap();
        assert!(!json.contains("error"));

        let json =
            serde_json::to_string(&ToolResult::failure("t", ToolError::cancelled("t"))).unwrap();
        assert!(!json.contains("output"));
        assert!(json.contains("CANCELLED"));
    }
}
