//! Terminal setup and teardown.
//!
//! The screen is drawn on the controlling terminal rather than on
//! standard output, so `txtmanip file | tee out` still works: the replay
//! line is the only thing that reaches stdout.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};

/// Where the interactive screen is written.
pub enum TerminalOutput {
    /// The controlling terminal, opened directly.
    Tty(File),
    /// Standard output, when no controlling terminal can be opened.
    Stdout(Stdout),
}

impl TerminalOutput {
    /// Open the controlling terminal, falling back to standard output.
    pub fn open() -> Self {
        match OpenOptions::new().write(true).open("/dev/tty") {
            Ok(tty) => Self::Tty(tty),
            Err(e) => {
                tracing::debug!(target: "render", error = %e, "tty_unavailable");
                Self::Stdout(io::stdout())
            }
        }
    }
}

impl Write for TerminalOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Tty(tty) => tty.write(buf),
            Self::Stdout(stdout) => stdout.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Tty(tty) => tty.flush(),
            Self::Stdout(stdout) => stdout.flush(),
        }
    }
}

/// Raw mode and alternate screen for as long as this value lives.
pub struct TerminalGuard {
    out: TerminalOutput,
    width: u16,
    height: u16,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no terminal to take over.
    pub fn enter() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        terminal::enable_raw_mode()?;

        let mut out = TerminalOutput::open();
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        Ok(Self { out, width, height })
    }

    /// Terminal size at entry.
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
