//! Tool registry
//!
//! An immutable association of tool name to (schema, argv builder, result
//! policy), built once at startup and shared read-only by every invocation.
//! Keeping the pairing in one table means argument validation and result
//! classification stay single-sourced instead of being re-implemented per
//! tool.

use std::collections::HashMap;

use super::binder::BoundArguments;
use super::command::CommandSpec;
use super::schema::ToolSchema;

/// Per-tool pure function from bound arguments to a resolved command line.
///
/// Builders never execute anything; identical input yields identical argv.
pub type CommandBuilder = fn(&BoundArguments) -> CommandSpec;

/// How a tool's successful-but-empty stdout is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultExpectation {
    /// Empty stdout is a valid reply (e.g. `ps` with nothing running).
    #[default]
    OutputOptional,
    /// The tool always prints something for a valid target; empty stdout
    /// means the identifier did not resolve.
    OutputExpected,
}

/// One registered tool: schema, builder, and result policy.
#[derive(Debug, Clone)]
pub struct ToolEntry {
    pub schema: ToolSchema,
    pub build: CommandBuilder,
    pub expectation: ResultExpectation,
    /// Parameter naming the operation's target (container ID, image name);
    /// quoted in failure messages so errors are actionable.
    pub target_param: Option<&'static str>,
}

impl ToolEntry {
    pub fn new(schema: ToolSchema, build: CommandBuilder) -> Self {
        Self {
            schema,
            build,
            expectation: ResultExpectation::default(),
            target_param: None,
        }
    }

    /// Mark this tool as always producing output for a valid target.
    pub fn expect_output(mut self) -> Self {
        self.expectation = ResultExpectation::OutputExpected;
        self
    }

    /// Name the parameter identifying the operation's target.
    pub fn with_target(mut self, param: &'static str) -> Self {
        debug_assert!(
            self.schema.get(param).is_some(),
            "target parameter '{}' not in schema of '{}'",
            param,
            self.schema.name
        );
        self.target_param = Some(param);
        self
    }
}

/// The startup-time tool table.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its schema name.
    pub fn register(mut self, entry: ToolEntry) -> Self {
        self.tools.insert(entry.schema.name.clone(), entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.tools.get(name)
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn schemas(&self) -> impl Iterator<Item = &ToolSchema> {
        self.tools.values().map(|entry| &entry.schema)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::schema::ParameterSpec;

    fn echo_entry() -> ToolEntry {
        let schema = ToolSchema::new("echo", "Echoes its argument")
            .with_parameter(ParameterSpec::text("text", "Text to echo", true));
        ToolEntry::new(schema, |args| {
            CommandSpec::new("echo").arg(args.required_text("text"))
        })
        .with_target("text")
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ToolRegistry::new().register(echo_entry());

        assert!(registry.has_tool("echo"));
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_entry_defaults() {
        let entry = echo_entry();
        assert_eq!(entry.expectation, ResultExpectation::OutputOptional);
        assert_eq!(entry.target_param, Some("text"));
    }

    #[test]
    fn test_expect_output_marker() {
        let entry = echo_entry().expect_output();
        assert_eq!(entry.expectation, ResultExpectation::OutputExpected);
    }

    #[test]
    fn test_names_are_sorted() {
        let b = ToolSchema::new("b_tool", "");
        let a = ToolSchema::new("a_tool", "");
        let registry = ToolRegistry::new()
            .register(ToolEntry::new(b, |_| CommandSpec::new("true")))
            .register(ToolEntry::new(a, |_| CommandSpec::new("true")));

        assert_eq!(registry.names(), ["a_tool", "b_tool"]);
    }
}
