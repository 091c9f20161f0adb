//! Line Editor: the single-line command input.
//!
//! Owns the typed command line, its cursor, the one-shot error message
//! shown under it, and the history of submitted lines. All boundary
//! operations are no-ops rather than errors.

use super::cursor::{display_width, Cursor};
use super::history::InputHistory;

/// Single-line editor with a prompt, UTF-8 aware cursor and history.
#[derive(Debug, Clone)]
pub struct LineEditor {
    /// Prompt drawn before the content (e.g. `"txtmanip> "`).
    prompt: String,
    /// Current line content.
    content: String,
    /// Cursor over `content`, offset by the prompt width.
    cursor: Cursor,
    /// Message shown once under the input line.
    error: Option<String>,
    /// Submitted lines.
    history: InputHistory,
}

impl LineEditor {
    /// Create an empty editor drawing `prompt` before the input.
    pub fn new(prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        let cursor = Cursor::new(display_width(&prompt));
        Self {
            prompt,
            content: String::new(),
            cursor,
            error: None,
            history: InputHistory::new(),
        }
    }

    /// The prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The current line content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The cursor.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cursor display column, prompt included.
    pub const fn cursor_column(&self) -> usize {
        self.cursor.column()
    }

    /// Cursor byte offset into the content.
    pub const fn cursor_offset(&self) -> usize {
        self.cursor.offset()
    }

    /// The pending one-shot error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submitted-line history.
    pub const fn history(&self) -> &InputHistory {
        &self.history
    }

    /// Store a message to be shown exactly once.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        let trimmed = message.trim_end();
        self.error = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Drop the error message once it has been shown.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Insert `ch` at the cursor without moving the cursor.
    ///
    /// Follow with [`step_forward_by_width`](Self::step_forward_by_width)
    /// to place the cursor after it, or use [`type_char`](Self::type_char).
    pub fn insert(&mut self, ch: char) {
        if self.cursor.is_at_end(&self.content) {
            self.content.push(ch);
        } else {
            self.content.insert(self.cursor.offset(), ch);
        }
    }

    /// Remove the character under the cursor.
    pub fn delete_at_cursor(&mut self) {
        if self.content.is_empty() || self.cursor.is_at_end(&self.content) {
            return;
        }
        self.content.remove(self.cursor.offset());
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor.step_backward(&self.content) {
            self.content.remove(self.cursor.offset());
        }
    }

    /// Insert `ch` and move the cursor past it.
    pub fn type_char(&mut self, ch: char) {
        self.insert(ch);
        self.step_forward_by_width(ch);
    }

    /// Move to the start of the line.
    pub const fn move_to_start(&mut self) {
        self.cursor.reset();
    }

    /// Move past the end of the line.
    pub fn move_to_end(&mut self) {
        self.cursor.move_to_end(&self.content);
    }

    /// Move one character right.
    pub fn step_forward(&mut self) {
        self.cursor.step_forward(&self.content);
    }

    /// Move one character left.
    pub fn step_backward(&mut self) {
        self.cursor.step_backward(&self.content);
    }

    /// Move past `ch`, which was just inserted at the cursor.
    pub fn step_forward_by_width(&mut self, ch: char) {
        self.cursor.step_over(&self.content, ch);
    }

    /// Move the history position towards older lines.
    ///
    /// Returns `false` when already at the oldest line.
    pub fn browse_history_up(&mut self) -> bool {
        self.history.up()
    }

    /// Move the history position towards newer lines.
    ///
    /// Returns `false` when not browsing.
    pub fn browse_history_down(&mut self) -> bool {
        self.history.down()
    }

    /// Replace the content with the line under the history position.
    ///
    /// Past the newest entry the line is cleared. Whatever was typed
    /// before browsing is not kept.
    pub fn materialize_history_selection(&mut self) {
        match self.history.selection() {
            Some(line) => {
                self.content = line.to_string();
                self.cursor.move_to_end(&self.content);
            }
            None => self.clear(),
        }
    }

    /// Append the current content to the history.
    pub fn commit_to_history(&mut self) {
        self.history.push(self.content.clone());
    }

    /// Empty the line and move the cursor to the start.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor.reset();
    }
}
