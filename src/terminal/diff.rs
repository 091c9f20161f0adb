//! Diffing: emit terminal commands only for rows that changed.
//!
//! All output is accumulated in a single buffer so a frame reaches the
//! terminal in one write.

use super::grid::{Cell, Grid, Tone};
use crossterm::{
    cursor::{MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io;

/// Statistics about one diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Rows rewritten.
    pub rows_changed: usize,
    /// Whether the whole screen was cleared first.
    pub full_redraw: bool,
}

const fn color_of(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::Reset,
        Tone::Error => Color::Red,
    }
}

/// Append the commands turning `current` into `next` to `output`, then
/// place the cursor at `cursor`.
///
/// With no `current` frame, or one of a different size, the screen is
/// cleared and every row is written.
pub fn render_diff(
    current: Option<&Grid>,
    next: &Grid,
    cursor: (u16, u16),
    output: &mut Vec<u8>,
) -> io::Result<DiffResult> {
    let previous =
        current.filter(|grid| grid.width() == next.width() && grid.height() == next.height());
    let mut result = DiffResult {
        full_redraw: previous.is_none(),
        ..DiffResult::default()
    };

    if result.full_redraw {
        queue!(output, ResetColor, Clear(ClearType::All))?;
    }

    for y in 0..next.height() {
        let row = next.row(y).unwrap_or_default();
        if previous.and_then(|grid| grid.row(y)) == Some(row) {
            continue;
        }
        write_row(output, y, row)?;
        result.rows_changed += 1;
    }

    queue!(output, MoveTo(cursor.0, cursor.1), Show)?;
    Ok(result)
}

/// Rewrite one full row.
fn write_row(output: &mut Vec<u8>, y: u16, row: &[Cell]) -> io::Result<()> {
    queue!(output, MoveTo(0, y))?;
    let mut tone = None;
    for cell in row {
        match cell {
            Cell::Blank => queue!(output, Print(' '))?,
            Cell::Glyph { grapheme, tone: cell_tone } => {
                if tone != Some(*cell_tone) {
                    queue!(output, SetForegroundColor(color_of(*cell_tone)))?;
                    tone = Some(*cell_tone);
                }
                queue!(output, Print(grapheme))?;
            }
            Cell::Continuation => {}
        }
    }
    queue!(output, ResetColor)
}
