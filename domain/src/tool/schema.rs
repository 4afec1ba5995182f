//! Tool parameter schemas

use serde::{Deserialize, Serialize};

/// How a parameter's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// String-valued: becomes a positional token or a `--flag value` pair.
    Text,
    /// Presence flag: supplying the parameter at all enables it, regardless
    /// of the value content (mirrors `--all`, `--rm` and friends).
    Flag,
}

/// Specification of a single tool parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name as it appears in request arguments
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Value interpretation
    pub kind: ParamKind,
    /// Whether the parameter must be supplied
    pub required: bool,
}

impl ParameterSpec {
    /// A string-valued parameter.
    pub fn text(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ParamKind::Text,
            required,
        }
    }

    /// A presence flag. Flags are never required: absence means "not set".
    pub fn flag(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ParamKind::Flag,
            required: false,
        }
    }
}

/// Declaration of one tool: its name and ordered parameter list.
///
/// Immutable after registration; created once at process start and shared
/// read-only by every invocation. Parameter order is the binder's
/// validation order and, by convention, the builders' emission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique tool name (e.g. "docker_inspect")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ParameterSpec>,
}

impl ToolSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter. Names must be unique within one tool.
    pub fn with_parameter(mut self, param: ParameterSpec) -> Self {
        debug_assert!(
            !self.parameters.iter().any(|p| p.name == param.name),
            "duplicate parameter '{}' in tool '{}'",
            param.name,
            self.name
        );
        self.parameters.push(param);
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
