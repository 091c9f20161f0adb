//! Shell-word splitting of a submitted command line.

use super::PipelineError;

/// A command line split into program and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Base command: the program to run.
    pub program: String,
    /// Remaining words.
    pub args: Vec<String>,
}

/// Split `line` into words using POSIX shell quoting rules.
///
/// Fails with [`PipelineError::Parse`] on an unterminated quote or a
/// trailing backslash.
pub fn split_words(line: &str) -> Result<Vec<String>, PipelineError> {
    shlex::split(line).ok_or_else(|| PipelineError::Parse {
        line: line.to_string(),
    })
}

/// Split `line` and separate the base command from its arguments.
pub fn parse_command_line(line: &str) -> Result<CommandLine, PipelineError> {
    let mut words = split_words(line)?.into_iter();
    let program = words.next().ok_or(PipelineError::EmptyCommand)?;
    Ok(CommandLine {
        program,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_words("grep -v  foo").unwrap(), ["grep", "-v", "foo"]);
    }

    #[test]
    fn test_split_quotes_and_escapes() {
        assert_eq!(
            split_words(r#"awk '{print $1}' "a b" c\ d"#).unwrap(),
            ["awk", "{print $1}", "a b", "c d"]
        );
    }

    #[test]
    fn test_split_unbalanced_quote() {
        assert_eq!(
            split_words("sed 's/a/b/"),
            Err(PipelineError::Parse {
                line: "sed 's/a/b/".to_string()
            })
        );
    }

    #[test]
    fn test_parse_command_line() {
        let command = parse_command_line("sort -r -n").unwrap();
        assert_eq!(command.program, "sort");
        assert_eq!(command.args, ["-r", "-n"]);
    }

    #[test]
    fn test_parse_whitespace_only_is_empty() {
        assert_eq!(parse_command_line("   "), Err(PipelineError::EmptyCommand));
        assert_eq!(parse_command_line(""), Err(PipelineError::EmptyCommand));
    }
}
