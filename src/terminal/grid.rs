//! Grid: the screen as rows of cells.
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//! A wide grapheme occupies its own cell plus a [`Cell::Continuation`]
//! to its right, so every column maps to exactly one cell.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Tab stops every this many columns.
pub const TAB_WIDTH: u16 = 8;

/// Foreground role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Regular text.
    #[default]
    Normal,
    /// The one-shot error line.
    Error,
}

/// A single terminal cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nothing drawn; shows as a space.
    #[default]
    Blank,
    /// A grapheme one or two columns wide.
    Glyph {
        /// The grapheme cluster.
        grapheme: String,
        /// Foreground role.
        tone: Tone,
    },
    /// Right half of a wide glyph.
    Continuation,
}

/// A grid of cells the size of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Create a blank grid. Zero dimensions give an empty grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::Blank; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Grid width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Get one row of cells.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = usize::from(y) * usize::from(self.width);
        Some(&self.cells[start..start + usize::from(self.width)])
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Blank);
    }

    /// Change dimensions. Content is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::Blank; usize::from(width) * usize::from(height)];
    }

    /// Put one grapheme at (x, y).
    ///
    /// Returns the columns it occupies, or 0 if it was not drawn (out of
    /// bounds, zero width, or a wide glyph hitting the right edge).
    pub fn put_grapheme(&mut self, x: u16, y: u16, grapheme: &str, tone: Tone) -> u16 {
        let width = u16::try_from(grapheme.width()).unwrap_or(u16::MAX);
        if width == 0 || x.saturating_add(width) > self.width {
            return 0;
        }
        let Some(idx) = self.index_of(x, y) else {
            return 0;
        };

        self.cells[idx] = Cell::Glyph {
            grapheme: grapheme.to_string(),
            tone,
        };
        for offset in 1..width {
            self.cells[idx + usize::from(offset)] = Cell::Continuation;
        }
        width
    }

    /// Draw `text` on row `y` starting at column `x`, clipping at the
    /// right edge.
    ///
    /// Tabs advance to the next tab stop; other control characters are
    /// skipped. Returns the column after the last drawn grapheme.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, tone: Tone) -> u16 {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if col >= self.width {
                break;
            }
            if grapheme == "\t" {
                col = (col / TAB_WIDTH + 1).saturating_mul(TAB_WIDTH);
                continue;
            }
            if grapheme.chars().any(char::is_control) {
                continue;
            }
            col += self.put_grapheme(col, y, grapheme, tone);
        }
        col.min(self.width)
    }

    /// Fill row `y` with `grapheme`.
    pub fn fill_row(&mut self, y: u16, grapheme: &str, tone: Tone) {
        let mut col = 0;
        while col < self.width {
            let used = self.put_grapheme(col, y, grapheme, tone);
            if used == 0 {
                break;
            }
            col += used;
        }
    }

    /// Row `y` as plain text, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .unwrap_or_default()
            .iter()
            .map(|cell| match cell {
                Cell::Blank => " ",
                Cell::Glyph { grapheme, .. } => grapheme.as_str(),
                Cell::Continuation => "",
            })
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(80, 24);
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 24);
        assert_eq!(grid.get(79, 23), Some(&Cell::Blank));
        assert_eq!(grid.get(80, 0), None);
    }

    #[test]
    fn test_grid_zero_size() {
        let mut grid = Grid::new(0, 0);
        assert_eq!(grid.put_str(0, 0, "abc", Tone::Normal), 0);
        assert_eq!(grid.row(0), None);
    }

    #[test]
    fn test_grid_wide_glyph() {
        let mut grid = Grid::new(10, 1);
        assert_eq!(grid.put_grapheme(0, 0, "日", Tone::Normal), 2);
        assert_eq!(grid.get(1, 0), Some(&Cell::Continuation));
        assert_eq!(grid.row_text(0), "日");
    }

    #[test]
    fn test_grid_wide_glyph_at_edge_is_dropped() {
        let mut grid = Grid::new(3, 1);
        assert_eq!(grid.put_str(0, 0, "a日本", Tone::Normal), 3);
        assert_eq!(grid.row_text(0), "a日");
    }

    #[test]
    fn test_grid_put_str_clips() {
        let mut grid = Grid::new(5, 2);
        let end = grid.put_str(1, 1, "abcdefg", Tone::Error);
        assert_eq!(end, 5);
        assert_eq!(grid.row_text(1), " abcd");
        assert_eq!(
            grid.get(1, 1),
            Some(&Cell::Glyph { grapheme: "a".to_string(), tone: Tone::Error })
        );
    }

    #[test]
    fn test_grid_tabs_and_controls() {
        let mut grid = Grid::new(20, 1);
        grid.put_str(0, 0, "a\tb\u{7}c", Tone::Normal);
        assert_eq!(grid.row_text(0), "a       bc");
    }

    #[test]
    fn test_grid_combining_mark_stays_with_base() {
        let mut grid = Grid::new(5, 1);
        assert_eq!(grid.put_str(0, 0, "e\u{301}x", Tone::Normal), 2);
        assert_eq!(grid.row_text(0), "e\u{301}x");
    }

    #[test]
    fn test_grid_fill_row() {
        let mut grid = Grid::new(4, 2);
        grid.fill_row(1, "-", Tone::Normal);
        assert_eq!(grid.row_text(1), "----");
        grid.clear();
        assert_eq!(grid.row_text(1), "");
    }
}
