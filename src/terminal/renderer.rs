//! Renderer: draws a [`View`] to the terminal.
//!
//! The session only depends on the [`Renderer`] trait. The terminal
//! implementation keeps the previously flushed frame and writes only
//! the rows that changed, batched into one write.

use super::diff::render_diff;
use super::grid::Grid;
use super::screen::{compose, cursor_position, View};
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;

/// Drawing to the terminal failed.
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(#[from] pub io::Error);

/// Something that can show a [`View`].
pub trait Renderer {
    /// Redraw the whole screen from `view`.
    fn draw(&mut self, view: &View<'_>) -> Result<(), RenderError>;

    /// The screen changed size; the next draw uses the new size.
    fn resize(&mut self, width: u16, height: u16);
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total bytes written to terminal.
    pub bytes_written: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// Double-buffered renderer writing to a terminal.
pub struct TerminalRenderer<W: Write> {
    /// Terminal output.
    out: W,
    /// What is on screen, `None` until the first flush or after a resize.
    current: Option<Grid>,
    /// Frame being composed.
    next: Grid,
    /// Pre-allocated output buffer.
    output: Vec<u8>,
    /// Render statistics.
    stats: RenderStats,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer for a screen of the given size.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            current: None,
            next: Grid::new(width, height),
            output: Vec::with_capacity(16 * 1024),
            stats: RenderStats::default(),
        }
    }

    /// Render statistics so far.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// The frame currently on screen.
    pub const fn current(&self) -> Option<&Grid> {
        self.current.as_ref()
    }

    /// Give back the output handle.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, view: &View<'_>) -> Result<(), RenderError> {
        let start = Instant::now();
        compose(&mut self.next, view);

        self.output.clear();
        let cursor = cursor_position(&self.next, view);
        let result = render_diff(self.current.as_ref(), &self.next, cursor, &mut self.output)?;

        self.out.write_all(&self.output)?;
        self.out.flush()?;

        // Swap buffers
        let same_size = self.current.as_ref().is_some_and(|current| {
            current.width() == self.next.width() && current.height() == self.next.height()
        });
        if same_size {
            if let Some(current) = self.current.as_mut() {
                std::mem::swap(current, &mut self.next);
            }
        } else {
            self.current = Some(self.next.clone());
        }

        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        tracing::trace!(
            target: "render",
            rows = result.rows_changed,
            full = result.full_redraw,
            bytes = self.output.len(),
            us = self.stats.last_render_us,
            "frame"
        );
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.next.resize(width, height);
        self.current = None;
    }
}
