//! Journal module: transformed content and the commands that produced it.
//!
//! This module contains:
//! - [`TextBuffer`]: current content and its undo snapshots
//! - [`InvocationLog`]: successfully executed command lines
//! - [`Journal`]: both of the above, pushed and popped together
//!
//! The buffer's undo stack and the log always have the same length. The
//! mutating halves of both types are crate-private, so the only way to
//! change either from outside is through [`Journal::apply`] and
//! [`Journal::undo`].

mod invocation_log;
mod text_buffer;

pub use invocation_log::InvocationLog;
pub use text_buffer::{EmptyHistory, TextBuffer};

/// Text Buffer and Invocation Log kept in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    buffer: TextBuffer,
    log: InvocationLog,
}

impl Journal {
    /// Start a journal over the initial source content.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: TextBuffer::new(content),
            log: InvocationLog::new(),
        }
    }

    /// The current content.
    pub fn content(&self) -> &[u8] {
        self.buffer.content()
    }

    /// The text buffer.
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The invocation log.
    pub const fn log(&self) -> &InvocationLog {
        &self.log
    }

    /// Number of applied steps.
    pub fn depth(&self) -> usize {
        debug_assert_eq!(self.buffer.undo_depth(), self.log.len());
        self.log.len()
    }

    /// Record a successful step: snapshot, replace content, log the line.
    pub fn apply(&mut self, command_line: impl Into<String>, output: Vec<u8>) {
        self.buffer.push_undo();
        self.buffer.set_content(output);
        self.log.record(command_line);
    }

    /// Revert the most recent step.
    ///
    /// Returns the command line that was undone.
    pub fn undo(&mut self) -> Result<String, EmptyHistory> {
        self.buffer.undo()?;
        self.log.pop_last().ok_or(EmptyHistory)
    }

    /// Consume the journal, keeping the executed command lines.
    pub fn into_invocations(self) -> Vec<String> {
        self.log.into_entries()
    }
}
