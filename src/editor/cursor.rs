//! Cursor: display column and byte offset kept as one value.
//!
//! The input line is edited by byte offset but drawn by display column.
//! Wide characters (CJK, most emoji) occupy two columns while taking
//! three or four UTF-8 bytes, so the two coordinates drift apart as soon
//! as the line holds anything but ASCII. Both live here and are only ever
//! moved together.
//!
//! The offset steps one character at a time. The column is always the
//! width of the content before the offset, measured per grapheme cluster
//! exactly as the screen grid draws it, so a ZWJ emoji sequence advances
//! the column once even though the cursor walks its characters.
//!
//! ```text
//!  prompt      content
//! ┌────────┬───┬──────┬───┐
//! │ "> "   │ a │  日  │ b │
//! └────────┴───┴──────┴───┘
//! column:  2   3      5   6
//! offset:  0   1      4   5
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string, summed per grapheme cluster.
///
/// Matches the cell count [`Grid::put_str`](crate::terminal::Grid::put_str)
/// uses for text without control characters.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// A position in the input line.
///
/// `column` is measured from the left edge of the screen and therefore
/// includes the prompt (`origin`). `offset` is a byte index into the
/// line content and always sits on a character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Column of the first content character (the prompt width).
    origin: usize,
    /// Display column, `origin..=origin + display_width(content)`.
    column: usize,
    /// Byte offset into the content.
    offset: usize,
}

impl Cursor {
    /// Create a cursor at the start of an empty line.
    pub const fn new(origin: usize) -> Self {
        Self {
            origin,
            column: origin,
            offset: 0,
        }
    }

    /// Column where content starts.
    #[inline]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    /// Display column, prompt included.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Display column relative to the start of the content.
    #[inline]
    pub const fn content_column(&self) -> usize {
        self.column - self.origin
    }

    /// Byte offset into the content.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Check if the cursor is at the start of the content.
    #[inline]
    pub const fn is_at_start(&self) -> bool {
        self.offset == 0
    }

    /// Check if the cursor is at the end of `text`.
    #[inline]
    pub const fn is_at_end(&self, text: &str) -> bool {
        self.offset >= text.len()
    }

    /// Move to the start of the content. O(1).
    pub const fn reset(&mut self) {
        self.column = self.origin;
        self.offset = 0;
    }

    /// Move past the last character of `text`.
    pub fn move_to_end(&mut self, text: &str) {
        self.offset = text.len();
        self.column = self.origin + display_width(text);
    }

    fn seek(&mut self, text: &str, offset: usize) {
        self.offset = offset;
        self.column = self.origin + text.get(..offset).map_or(0, display_width);
    }

    /// Step over the character under the cursor.
    ///
    /// Returns `false` (and does nothing) at the end of `text`.
    pub fn step_forward(&mut self, text: &str) -> bool {
        let Some(ch) = text.get(self.offset..).and_then(|rest| rest.chars().next()) else {
            return false;
        };
        self.seek(text, self.offset + ch.len_utf8());
        true
    }

    /// Step back over the character before the cursor.
    ///
    /// Returns `false` (and does nothing) at the start of `text`.
    pub fn step_backward(&mut self, text: &str) -> bool {
        let Some(ch) = text.get(..self.offset).and_then(|head| head.chars().next_back()) else {
            return false;
        };
        self.seek(text, self.offset - ch.len_utf8());
        true
    }

    /// Step over `ch`, which was just inserted at the cursor.
    ///
    /// If `ch` is not actually under the cursor this falls back to a
    /// plain [`step_forward`](Self::step_forward), so the two coordinates
    /// can never disagree with the content.
    pub fn step_over(&mut self, text: &str, ch: char) -> bool {
        match text.get(self.offset..) {
            Some(rest) if rest.starts_with(ch) => {
                self.seek(text, self.offset + ch.len_utf8());
                true
            }
            _ => self.step_forward(text),
        }
    }
}
