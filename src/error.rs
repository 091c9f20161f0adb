//! Error taxonomy for the session and the outer driver.
//!
//! Recoverable problems (a disallowed or failing command, undo with
//! nothing to undo) never show up here: they are reported on the error
//! line or ignored. Everything in this module ends the run with
//! [`EXIT_ERROR`].

use crate::config::ConfigError;
use crate::pipeline::PipelineError;
use crate::source::SourceError;
use crate::terminal::RenderError;
use std::io;
use thiserror::Error;

/// Exit code after a normal quit.
pub const EXIT_OK: u8 = 0;
/// Exit code for any startup or fatal session error.
pub const EXIT_ERROR: u8 = 11;

/// Errors that end an interactive session abnormally.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A submitted line could not be parsed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Drawing failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The terminal event source reported an error.
    #[error("reading terminal input failed: {0}")]
    Input(String),

    /// The event source went away before a quit key.
    #[error("terminal input closed")]
    Disconnected,
}

/// Errors before the interactive loop starts.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration could not be loaded.
    #[error("read config failed: {0}")]
    Config(#[from] ConfigError),

    /// Source content could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The terminal could not be set up.
    #[error("initialize failed: {0}")]
    Terminal(#[source] io::Error),

    /// A worker thread could not be started.
    #[error("starting {name} thread failed: {source}")]
    Spawn {
        /// Thread name.
        name: &'static str,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Anything that makes the program exit with [`EXIT_ERROR`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed before the session started.
    #[error(transparent)]
    Startup(#[from] StartupError),

    /// The session ended abnormally.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The session worker panicked or vanished without reporting.
    #[error("session worker exited unexpectedly")]
    WorkerLost,
}
