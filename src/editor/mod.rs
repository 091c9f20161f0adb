//! Editor module: the single-line command input.
//!
//! This module contains:
//! - [`Cursor`]: display column and byte offset moved as one value
//! - [`InputHistory`]: submitted lines with a browse position
//! - [`LineEditor`]: the editor itself

mod cursor;
mod history;
mod line_editor;

pub use cursor::{display_width, Cursor};
pub use history::InputHistory;
pub use line_editor::LineEditor;
