//! Free-text command tokenization
//!
//! Tools like `docker_run` and `docker_exec` accept an arbitrary inner
//! command as one caller-supplied string that must become argv tokens for
//! the process run inside the container. Naive whitespace splitting mangles
//! quoting and silently splits on shell operators (`echo a > b` becoming
//! three unrelated tokens), so classification is explicit:
//!
//! - a recognized `interpreter -c script` prefix keeps the script as one
//!   unsplit token;
//! - text containing quotes or shell operators is routed through
//!   [`DEFAULT_SHELL`] untouched;
//! - only plain word sequences are whitespace-split.

/// Shell used to wrap metacharacter-bearing command text.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Interpreter tokens recognized as an explicit `-c` shell invocation.
const INTERPRETERS: &[&str] = &["/bin/sh", "/bin/bash", "sh", "bash"];

/// Characters that make whitespace splitting unsafe.
const METACHARACTERS: &[char] = &['"', '\'', '&', '|', '>', '<'];

/// Whether the text contains quoting or shell operators and therefore must
/// not be whitespace-split.
pub fn has_shell_metacharacters(text: &str) -> bool {
    text.contains(METACHARACTERS)
}

/// Classified free-text command, ready to become argv tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandText {
    /// Plain words, split on whitespace into independent tokens.
    Plain(Vec<String>),
    /// An explicit `interpreter -c script` invocation; the script stays one
    /// token, with one pair of matching surrounding quotes stripped.
    Interpreter { program: String, script: String },
    /// Metacharacter-bearing text, passed untouched to [`DEFAULT_SHELL`].
    Wrapped(String),
}

impl CommandText {
    /// Classify caller-supplied command text.
    pub fn parse(text: &str) -> Self {
        // An embedded "interpreter -c rest" takes priority: the rest is the
        // script and must survive as a single token even though it usually
        // contains quotes itself.
        if let Some((prefix, script)) = text.split_once(" -c ") {
            let program = prefix.trim();
            if INTERPRETERS.contains(&program) {
                return CommandText::Interpreter {
                    program: program.to_string(),
                    script: strip_outer_quotes(script.trim()).to_string(),
                };
            }
        }

        if has_shell_metacharacters(text) {
            return CommandText::Wrapped(text.to_string());
        }

        CommandText::Plain(text.split_whitespace().map(str::to_string).collect())
    }

    /// The argv tokens this text contributes.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            CommandText::Plain(tokens) => tokens,
            CommandText::Interpreter { program, script } => {
                vec![program, "-c".to_string(), script]
            }
            CommandText::Wrapped(text) => {
                vec![DEFAULT_SHELL.to_string(), "-c".to_string(), text]
            }
        }
    }
}

/// Strip one pair of surrounding quotes, if they delimit the whole script.
///
/// The same quote char reappearing inside means the outer characters belong
/// to different quoted spans (`'a' > 'b'`); stripping them would leave the
/// script with unbalanced quotes, so it passes through untouched.
fn strip_outer_quotes(script: &str) -> &str {
    let bytes = script.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last
            && (first == b'"' || first == b'\'')
            && !script[1..script.len() - 1].contains(first as char)
        {
            return &script[1..script.len() - 1];
        }
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words_are_whitespace_split() {
        let parsed = CommandText::parse("ls -la /tmp");
        assert_eq!(
            parsed,
            CommandText::Plain(vec!["ls".into(), "-la".into(), "/tmp".into()])
        );
        assert_eq!(parsed.into_tokens(), ["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert_eq!(CommandText::parse("").into_tokens(), Vec::<String>::new());
        assert_eq!(CommandText::parse("   ").into_tokens(), Vec::<String>::new());
    }

    #[test]
    fn test_interpreter_dash_c_keeps_script_whole() {
        let parsed = CommandText::parse(r#"/bin/sh -c "echo hi && echo bye""#);
        assert_eq!(
            parsed.into_tokens(),
            ["/bin/sh", "-c", "echo hi && echo bye"]
        );
    }

    #[test]
    fn test_bash_interpreter_recognized() {
        let parsed = CommandText::parse("/bin/bash -c 'for i in 1 2 3; do echo $i; done'");
        assert_eq!(
            parsed.into_tokens(),
            ["/bin/bash", "-c", "for i in 1 2 3; do echo $i; done"]
        );
    }

    #[test]
    fn test_unquoted_script_survives_unsplit() {
        let parsed = CommandText::parse("sh -c echo hi && echo bye");
        assert_eq!(parsed.into_tokens(), ["sh", "-c", "echo hi && echo bye"]);
    }

    #[test]
    fn test_operator_text_is_shell_wrapped_not_split() {
        // `>` must never become its own token.
        let parsed = CommandText::parse("echo a > b");
        assert_eq!(parsed, CommandText::Wrapped("echo a > b".into()));
        assert_eq!(parsed.into_tokens(), ["/bin/sh", "-c", "echo a > b"]);
    }

    #[test]
    fn test_pipe_and_quote_text_is_shell_wrapped() {
        for text in ["cat /etc/passwd | wc -l", r#"echo "hello world""#, "echo it's"] {
            match CommandText::parse(text) {
                CommandText::Wrapped(inner) => assert_eq!(inner, text),
                other => panic!("expected Wrapped for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_interpreter_prefix_falls_through() {
        // "python -c ..." is not a recognized shell; the quotes route it
        // through the wrapper instead.
        let parsed = CommandText::parse(r#"python -c "print(1)""#);
        assert_eq!(
            parsed.into_tokens(),
            ["/bin/sh", "-c", r#"python -c "print(1)""#]
        );
    }

    #[test]
    fn test_metacharacter_predicate() {
        assert!(has_shell_metacharacters("a > b"));
        assert!(has_shell_metacharacters("a | b"));
        assert!(has_shell_metacharacters(r#"say "hi""#));
        assert!(!has_shell_metacharacters("ls -la /tmp"));
    }

    #[test]
    fn test_strip_outer_quotes_only_matching_pairs() {
        assert_eq!(strip_outer_quotes(r#""echo hi""#), "echo hi");
        assert_eq!(strip_outer_quotes("'echo hi'"), "echo hi");
        assert_eq!(strip_outer_quotes(r#""echo hi'"#), r#""echo hi'"#);
        assert_eq!(strip_outer_quotes("echo hi"), "echo hi");
    }

    #[test]
    fn test_strip_outer_quotes_spares_separate_quoted_spans() {
        // Outer quotes that are not one delimiting pair must stay; stripping
        // them would leave the script with unbalanced quotes.
        assert_eq!(strip_outer_quotes("'a' op 'b'"), "'a' op 'b'");
        assert_eq!(
            strip_outer_quotes(r#""echo hi" > "out.txt""#),
            r#""echo hi" > "out.txt""#
        );
    }

    #[test]
    fn test_script_with_multiple_quoted_spans_survives_intact() {
        let parsed = CommandText::parse("sh -c 'echo hi' > 'out.txt'");
        assert_eq!(parsed.into_tokens(), ["sh", "-c", "'echo hi' > 'out.txt'"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "/bin/sh -c \"date\"";
        assert_eq!(CommandText::parse(text), CommandText::parse(text));
    }
}
