//! Invocation Log: command lines that ran successfully, in order.

/// Ordered record of successfully executed command lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationLog {
    entries: Vec<String>,
}

impl InvocationLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing ran yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in execution order.
    pub fn snapshot(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn record(&mut self, command_line: impl Into<String>) {
        self.entries.push(command_line.into());
    }

    pub(crate) fn pop_last(&mut self) -> Option<String> {
        self.entries.pop()
    }

    pub(crate) fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
