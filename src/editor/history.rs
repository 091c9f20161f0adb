//! Per-session history of submitted command lines.

/// Append-only list of submitted lines with a browse position.
///
/// The position ranges over `0..=len()`; `len()` means "not browsing",
/// in which case the editor shows its live content.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: Vec<String>,
    position: usize,
}

impl InputHistory {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: 0,
        }
    }

    /// Number of recorded lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current browse position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the position points at a recorded line.
    #[inline]
    pub fn is_browsing(&self) -> bool {
        self.position < self.entries.len()
    }

    /// The line under the browse position, if browsing.
    pub fn selection(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    /// Move towards older lines. Returns `false` at the oldest line.
    pub fn up(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Move towards newer lines. Returns `false` once back at the live line.
    pub fn down(&mut self) -> bool {
        if self.position >= self.entries.len() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Record a line and stop browsing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.position = self.entries.len();
    }
}
