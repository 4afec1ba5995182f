//! Resolved command lines
//!
//! A [`CommandSpec`] is the builder stage's output: a program name plus an
//! ordered argv, fully resolved, ready to hand to process creation. The
//! emission helpers centralize the two flag rules every tool builder shares —
//! a valued flag is two tokens and appears only when the caller supplied a
//! value; a presence flag is one token and never carries a value.

use super::binder::BoundArguments;

/// A fully resolved external command: program name and ordered argv.
///
/// Never contains unexpanded placeholders. The argv tokens are passed to
/// process creation as-is; no shell ever re-interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program identifier, resolved through PATH by the OS
    pub program: String,
    /// Argument tokens, in emission order
    pub argv: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            argv: Vec::new(),
        }
    }

    /// Append a fixed token.
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.argv.push(token.into());
        self
    }

    /// Append a sequence of tokens.
    pub fn args(mut self, tokens: impl IntoIterator<Item = String>) -> Self {
        self.argv.extend(tokens);
        self
    }

    /// Emit `flag value` when the text parameter was supplied.
    ///
    /// An empty supplied value still emits the pair; only absence skips it.
    pub fn valued_flag(mut self, args: &BoundArguments, name: &str, flag: &str) -> Self {
        if let Some(value) = args.text(name) {
            self.argv.push(flag.to_string());
            self.argv.push(value.to_string());
        }
        self
    }

    /// Emit `flag` as a single token when the presence parameter was supplied.
    pub fn presence_flag(mut self, args: &BoundArguments, name: &str, flag: &str) -> Self {
        if args.is_present(name) {
            self.argv.push(flag.to_string());
        }
        self
    }

    /// Emit the parameter value as a bare positional token when supplied.
    pub fn optional_arg(mut self, args: &BoundArguments, name: &str) -> Self {
        if let Some(value) = args.text(name) {
            self.argv.push(value.to_string());
        }
        self
    }

    /// The full command line as one string, for logs and error messages.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for token in &self.argv {
            line.push(' ');
            line.push_str(token);
        }
        line
    }
}
