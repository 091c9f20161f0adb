//! Terminal module: everything between the session and the screen.
//!
//! This module contains:
//! - [`Grid`] / [`Cell`]: the screen as rows of cells
//! - [`screen`]: fixed row layout and the read-only [`View`] snapshot
//! - [`diff`]: row-level diffing into a single output buffer
//! - [`Renderer`] / [`TerminalRenderer`]: drawing a view
//! - [`TerminalGuard`]: raw mode and alternate screen

pub mod diff;
mod grid;
mod guard;
mod renderer;
pub mod screen;

pub use grid::{Cell, Grid, Tone, TAB_WIDTH};
pub use guard::{TerminalGuard, TerminalOutput};
pub use renderer::{RenderError, RenderStats, Renderer, TerminalRenderer};
pub use screen::View;
