//! Command Pipeline: turn a submitted line into new buffer content.
//!
//! A submitted line goes through four stages:
//!
//! ```text
//!  "grep -v foo"
//!       │ split_words (POSIX quoting)          ──▶ PipelineError::Parse (fatal)
//!       ▼
//!  program + args                              ──▶ PipelineError::EmptyCommand
//!       │ AllowList::permits(program)          ──▶ Outcome::Disallowed
//!       ▼
//!  Spawner::spawn(program, args, content)      ──▶ Outcome::Failure (launch error)
//!       │ classify(exit code)
//!       ▼
//!  Outcome::Success { stdout, notice } | Outcome::Failure { message }
//! ```
//!
//! The pipeline never touches the journal or the editor; the session
//! applies the [`Outcome`].

mod allow_list;
mod spawn;
mod tokenize;

pub use allow_list::AllowList;
pub use spawn::{ProcessOutput, Spawner, SystemSpawner};
pub use tokenize::{parse_command_line, split_words, CommandLine};

use std::time::Instant;
use thiserror::Error;

/// The one program whose exit status 1 is not a failure.
///
/// `grep` exits with 1 when no line matched, which here simply means
/// the result is empty.
const NO_MATCH_TOLERANT_COMMAND: &str = "grep";
const NO_MATCH_EXIT_CODE: i32 = 1;

/// Errors that stop the pipeline before a program is considered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Unterminated quote or trailing escape.
    #[error("parse command failed: invalid quoting in `{line}`")]
    Parse {
        /// The submitted line.
        line: String,
    },

    /// The line holds no words.
    #[error("empty command")]
    EmptyCommand,
}

/// Result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The program ran and its output becomes the new content.
    Success {
        /// Captured standard output.
        stdout: Vec<u8>,
        /// Standard error of a `grep` that matched nothing, shown
        /// alongside the accepted output.
        notice: Option<String>,
    },

    /// The base command is not on the allow-list. Nothing was spawned.
    Disallowed {
        /// The rejected base command.
        command: String,
    },

    /// The program failed to launch or exited unsuccessfully.
    Failure {
        /// Captured standard error or the launch error text.
        message: String,
    },
}

impl Outcome {
    /// Check if this is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Human-readable message for the error line, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success { notice, .. } => notice.clone(),
            Self::Disallowed { command } => Some(format!("{command} cannot be executed")),
            Self::Failure { message } => Some(message.clone()),
        }
    }
}

/// Classify a finished process.
pub fn classify(command: &str, output: ProcessOutput) -> Outcome {
    match output.code {
        Some(0) => Outcome::Success {
            stdout: output.stdout,
            notice: None,
        },
        Some(NO_MATCH_EXIT_CODE) if command == NO_MATCH_TOLERANT_COMMAND => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let notice = (!stderr.trim().is_empty()).then(|| stderr.into_owned());
            Outcome::Success {
                stdout: output.stdout,
                notice,
            }
        }
        code => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                match code {
                    Some(code) => format!("{command} exited with status {code}"),
                    None => format!("{command} terminated by signal"),
                }
            } else {
                stderr.into_owned()
            };
            Outcome::Failure { message }
        }
    }
}

/// Runs command lines against an allow-list.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<S = SystemSpawner> {
    allow_list: AllowList,
    spawner: S,
}

impl Pipeline<SystemSpawner> {
    /// Create a pipeline that spawns real processes.
    pub const fn new(allow_list: AllowList) -> Self {
        Self {
            allow_list,
            spawner: SystemSpawner,
        }
    }
}

impl<S: Spawner> Pipeline<S> {
    /// Create a pipeline with a custom spawner.
    pub const fn with_spawner(allow_list: AllowList, spawner: S) -> Self {
        Self {
            allow_list,
            spawner,
        }
    }

    /// The allow-list in use.
    pub const fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// The spawner in use.
    pub const fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Run `line` with `content` as standard input.
    pub fn execute(&self, line: &str, content: &[u8]) -> Result<Outcome, PipelineError> {
        let CommandLine { program, args } = parse_command_line(line)?;

        if !self.allow_list.permits(&program) {
            tracing::warn!(target: "pipeline", command = %program, "command_disallowed");
            return Ok(Outcome::Disallowed { command: program });
        }

        let started = Instant::now();
        let output = match self.spawner.spawn(&program, &args, content) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(target: "pipeline", command = %program, error = %e, "launch_failed");
                return Ok(Outcome::Failure {
                    message: format!("{program}: {e}"),
                });
            }
        };

        let code = output.code;
        let stdout_bytes = output.stdout.len();
        let outcome = classify(&program, output);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if outcome.is_success() {
            tracing::info!(
                target: "pipeline",
                command = %line,
                status = ?code,
                elapsed_ms,
                stdout_bytes,
                "command_finished"
            );
        } else {
            tracing::warn!(
                target: "pipeline",
                command = %line,
                status = ?code,
                elapsed_ms,
                "command_failed"
            );
        }
        Ok(outcome)
    }
}
