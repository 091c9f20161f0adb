//! Text Buffer: the content being transformed, with undo snapshots.

use thiserror::Error;

/// Undo was requested with no snapshot to return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nothing to undo")]
pub struct EmptyHistory;

/// Current content plus the stack of contents it replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: Vec<u8>,
    /// Prior contents, most recent last.
    undo_stack: Vec<Vec<u8>>,
}

impl TextBuffer {
    /// Create a buffer holding `content` with no undo history.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            undo_stack: Vec::new(),
        }
    }

    /// The current content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Check if there is a snapshot to undo to.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Snapshot the current content. Call before [`set_content`](Self::set_content).
    pub(crate) fn push_undo(&mut self) {
        self.undo_stack.push(self.content.clone());
    }

    /// Replace the content unconditionally.
    pub(crate) fn set_content(&mut self, content: Vec<u8>) {
        self.content = content;
    }

    /// Restore the most recent snapshot.
    pub(crate) fn undo(&mut self) -> Result<(), EmptyHistory> {
        let previous = self.undo_stack.pop().ok_or(EmptyHistory)?;
        self.content = previous;
        Ok(())
    }
}
