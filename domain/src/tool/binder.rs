//! Argument binding — raw request arguments validated against a schema.
//!
//! Binding is the only place argument validation happens; builders downstream
//! may assume every `required` constraint holds. Violations are reported
//! fail-fast, in schema declaration order, so a malformed request always
//! produces the same error.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use super::call::ToolCall;
use super::schema::{ParamKind, ToolSchema};

/// Validation failure, naming the offending parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("missing required parameter '{parameter}' for tool '{tool}'")]
    MissingParameter { tool: String, parameter: String },

    #[error("parameter '{parameter}' for tool '{tool}' must be a string")]
    WrongType { tool: String, parameter: String },

    #[error("unknown parameter '{parameter}' for tool '{tool}'")]
    UnknownParameter { tool: String, parameter: String },
}

impl BindError {
    /// The parameter this error is about.
    pub fn parameter(&self) -> &str {
        match self {
            BindError::MissingParameter { parameter, .. }
            | BindError::WrongType { parameter, .. }
            | BindError::UnknownParameter { parameter, .. } => parameter,
        }
    }
}

/// A validated argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    /// A string value for a [`ParamKind::Text`] parameter.
    Text(String),
    /// A [`ParamKind::Flag`] parameter that was supplied.
    Present,
}

/// Validated, typed argument set satisfying every `required` constraint of
/// the schema it was bound against. Absent optionals are simply absent —
/// never defaulted to an empty string — so builders can tell "not supplied"
/// from "supplied empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArguments {
    values: HashMap<String, BoundValue>,
}

impl BoundArguments {
    /// The string value of a text parameter, if supplied.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(BoundValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Whether a flag parameter was supplied.
    pub fn is_present(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(BoundValue::Present))
    }

    /// The value of a required text parameter.
    ///
    /// Binding guarantees required parameters are bound, so builders call
    /// this for positionals the schema marks required.
    ///
    /// # Panics
    ///
    /// Panics if the parameter was not bound as text, which means the caller
    /// bypassed [`bind_arguments`] or the schema disagrees with the builder.
    pub fn required_text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(BoundValue::Text(s)) => s,
            _ => panic!("parameter '{name}' not bound; builder invoked without binding"),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validate a raw call against a schema, producing [`BoundArguments`].
///
/// Pure function: no side effects, deterministic error for a given input.
/// Presence flags bind as [`BoundValue::Present`] for any non-absent value,
/// including the empty string and `false` — only absence means "not set".
pub fn bind_arguments(schema: &ToolSchema, call: &ToolCall) -> Result<BoundArguments, BindError> {
    let mut values = HashMap::new();

    for param in &schema.parameters {
        match call.arguments.get(&param.name) {
            None => {
                if param.required {
                    return Err(BindError::MissingParameter {
                        tool: schema.name.clone(),
                        parameter: param.name.clone(),
                    });
                }
            }
            Some(raw) => {
                let bound = match param.kind {
                    ParamKind::Flag => BoundValue::Present,
                    ParamKind::Text => match raw {
                        Value::String(s) => BoundValue::Text(s.clone()),
                        _ => {
                            return Err(BindError::WrongType {
                                tool: schema.name.clone(),
                                parameter: param.name.clone(),
                            });
                        }
                    },
                };
                values.insert(param.name.clone(), bound);
            }
        }
    }

    // Arguments the schema does not declare are rejected after the schema
    // pass; sorted so the reported parameter is deterministic.
    let mut unknown: Vec<&String> = call
        .arguments
        .keys()
        .filter(|name| schema.get(name).is_none())
        .collect();
    unknown.sort();
    if let Some(name) = unknown.first() {
        return Err(BindError::UnknownParameter {
            tool: schema.name.clone(),
            parameter: (*name).clone(),
        });
    }

    Ok(BoundArguments { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::schema::ParameterSpec;

    fn inspect_schema() -> ToolSchema {
        ToolSchema::new("docker_inspect", "Inspects a container")
            .with_parameter(ParameterSpec::text("containerID", "Container to inspect", true))
    }

    fn ps_schema() -> ToolSchema {
        ToolSchema::new("docker_ps", "Lists containers")
            .with_parameter(ParameterSpec::text("filter", "Filter conditions", false))
            .with_parameter(ParameterSpec::flag("all", "Show all containers"))
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = bind_arguments(&inspect_schema(), &ToolCall::new("docker_inspect")).unwrap_err();

        assert_eq!(
            err,
            BindError::MissingParameter {
                tool: "docker_inspect".into(),
                parameter: "containerID".into(),
            }
        );
        assert_eq!(err.parameter(), "containerID");
    }

    #[test]
    fn test_wrong_type_for_text_parameter() {
        let call = ToolCall::new("docker_inspect").with_arg("containerID", true);
        let err = bind_arguments(&inspect_schema(), &call).unwrap_err();

        assert_eq!(err.parameter(), "containerID");
        assert!(matches!(err, BindError::WrongType { .. }));
    }

    #[test]
    fn test_fail_fast_in_declaration_order() {
        let schema = ToolSchema::new("t", "")
            .with_parameter(ParameterSpec::text("first", "", true))
            .with_parameter(ParameterSpec::text("second", "", true));

        // Both missing: the first declared parameter is reported.
        let err = bind_arguments(&schema, &ToolCall::new("t")).unwrap_err();
        assert_eq!(err.parameter(), "first");
    }

    #[test]
    fn test_optional_absent_stays_absent() {
        let bound = bind_arguments(&ps_schema(), &ToolCall::new("docker_ps")).unwrap();

        assert!(bound.is_empty());
        assert_eq!(bound.text("filter"), None);
        assert!(!bound.is_present("all"));
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let call = ToolCall::new("docker_ps").with_arg("filter", "");
        let bound = bind_arguments(&ps_schema(), &call).unwrap();

        // Supplied-but-empty is distinguishable from not supplied.
        assert_eq!(bound.text("filter"), Some(""));
    }

    #[test]
    fn test_flag_present_with_empty_string() {
        let call = ToolCall::new("docker_ps").with_arg("all", "");
        let bound = bind_arguments(&ps_schema(), &call).unwrap();

        assert!(bound.is_present("all"));
    }

    #[test]
    fn test_flag_present_with_boolean() {
        // Any non-absent value counts, boolean false included.
        for value in [serde_json::Value::Bool(true), serde_json::Value::Bool(false)] {
            let call = ToolCall::new("docker_ps").with_arg("all", value);
            let bound = bind_arguments(&ps_schema(), &call).unwrap();
            assert!(bound.is_present("all"));
        }
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let call = ToolCall::new("docker_ps")
            .with_arg("zeta", "x")
            .with_arg("alpha", "y");
        let err = bind_arguments(&ps_schema(), &call).unwrap_err();

        // Deterministic: lexicographically first unknown name.
        assert_eq!(
            err,
            BindError::UnknownParameter {
                tool: "docker_ps".into(),
                parameter: "alpha".into(),
            }
        );
    }

    #[test]
    fn test_bind_is_deterministic() {
        let call = ToolCall::new("docker_ps")
            .with_arg("filter", "status=running")
            .with_arg("all", true);

        let first = bind_arguments(&ps_schema(), &call).unwrap();
        let second = bind_arguments(&ps_schema(), &call).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_required_text_after_binding() {
        let call = ToolCall::new("docker_inspect").with_arg("containerID", "abc123");
        let bound = bind_arguments(&inspect_schema(), &call).unwrap();

        assert_eq!(bound.required_text("containerID"), "abc123");
    }
}
