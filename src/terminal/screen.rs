//! Screen layout: fixed rows for the input line, error line, border and
//! text area.
//!
//! ```text
//! row 0  txtmanip> grep foo█
//! row 1  sed: -e expression #1, char 3: unterminated `s' command
//! row 2  --------------------------------------------------------
//! row 3  first line of the text buffer
//! row 4  second line ...
//! ```

use super::grid::{Grid, Tone};

/// Row of the prompt and input line.
pub const INPUT_ROW: u16 = 0;
/// Row of the one-shot error message.
pub const ERROR_ROW: u16 = 1;
/// Row of the separator.
pub const BORDER_ROW: u16 = 2;
/// First row of the text area.
pub const TEXT_ROW: u16 = 3;

/// Read-only snapshot of everything the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a> {
    /// Prompt drawn before the input.
    pub prompt: &'a str,
    /// Input line content.
    pub input: &'a str,
    /// Cursor column, prompt included.
    pub cursor_column: usize,
    /// Error message, if one is pending.
    pub error: Option<&'a str>,
    /// Text buffer content.
    pub text: &'a [u8],
}

/// Lay out `view` into `grid`.
///
/// The text area only breaks lines at literal newlines; long lines are
/// clipped at the right edge and extra lines at the bottom.
pub fn compose(grid: &mut Grid, view: &View<'_>) {
    grid.clear();

    let after_prompt = grid.put_str(0, INPUT_ROW, view.prompt, Tone::Normal);
    grid.put_str(after_prompt, INPUT_ROW, view.input, Tone::Normal);

    if let Some(error) = view.error {
        let single_line = error.replace(['\n', '\r'], " ");
        grid.put_str(0, ERROR_ROW, &single_line, Tone::Error);
    }

    grid.fill_row(BORDER_ROW, "-", Tone::Normal);

    let text = String::from_utf8_lossy(view.text);
    for (y, line) in (TEXT_ROW..grid.height()).zip(text.split('\n')) {
        grid.put_str(0, y, line, Tone::Normal);
    }
}

/// Where the terminal cursor goes: on the input line, clamped to the screen.
pub fn cursor_position(grid: &Grid, view: &View<'_>) -> (u16, u16) {
    let max_x = grid.width().saturating_sub(1);
    let x = u16::try_from(view.cursor_column).map_or(max_x, |x| x.min(max_x));
    (x, INPUT_ROW)
}
