//! Outer driver: startup, the session worker, teardown.
//!
//! ```text
//!  main ──▶ Source::acquire ──▶ Config::load ──▶ TerminalGuard::enter
//!                                                    │
//!            ┌───────────────────────────────────────┘
//!            ▼
//!  InputActor ──InputEvent──▶ session thread ──done (bounded 1)──▶ driver
//!                                                                   │
//!                              teardown, then replay line or error ◀┘
//! ```
//!
//! The session runs on its own thread so the driver can always restore
//! the terminal, whether the session returns, fails or panics.

use crate::actor::{InputActor, InputEvent};
use crate::cli::Args;
use crate::config::Config;
use crate::error::{AppError, StartupError};
use crate::pipeline::Pipeline;
use crate::replay;
use crate::session::Session;
use crate::source::Source;
use crate::terminal::{TerminalGuard, TerminalOutput, TerminalRenderer};
use crossbeam_channel::{bounded, Receiver};
use std::thread;
use std::time::Duration;

/// How long the input thread waits for an event before checking shutdown.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);
/// Keys that may queue up while a command runs.
const INPUT_CHANNEL_CAPACITY: usize = 256;

/// Everything needed before the terminal is taken over.
pub struct Prepared {
    source: Source,
    config: Config,
}

impl Prepared {
    /// Read the source content and the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`StartupError`] for a missing or empty source or a bad
    /// configuration file.
    pub fn load(args: &Args) -> Result<Self, StartupError> {
        let source = Source::acquire(args.file.as_deref())?;
        let config = Config::load(&args.config)?;
        Ok(Self { source, config })
    }

    /// The source that was read.
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// The loaded configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

/// Run the whole program and return the replay line.
///
/// # Errors
///
/// Any startup or fatal session error.
pub fn run(args: &Args) -> Result<String, AppError> {
    let prepared = Prepared::load(args)?;
    interact(prepared)
}

/// Take over the terminal and run the session to completion.
///
/// # Errors
///
/// Any terminal setup or fatal session error.
pub fn interact(prepared: Prepared) -> Result<String, AppError> {
    let Prepared { source, config } = prepared;
    let descriptor = source.descriptor();
    let (_, content) = source.into_parts();
    let pipeline = Pipeline::new(config.allow_list());

    let guard = TerminalGuard::enter().map_err(StartupError::Terminal)?;
    let (width, height) = guard.size();

    let (key_tx, key_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let input = InputActor::spawn(key_tx, INPUT_POLL_TIMEOUT).map_err(|source| {
        StartupError::Spawn {
            name: "input",
            source,
        }
    })?;

    let (done_tx, done_rx) = bounded(1);
    let worker = thread::Builder::new()
        .name("txtmanip-session".to_string())
        .spawn(move || {
            let mut keys: Receiver<InputEvent> = key_rx;
            let mut renderer = TerminalRenderer::new(TerminalOutput::open(), width, height);
            let result = Session::new(content, pipeline).run(&mut keys, &mut renderer);
            let _ = done_tx.send(result);
        })
        .map_err(|source| StartupError::Spawn {
            name: "session",
            source,
        })?;

    let finished = done_rx.recv();
    input.join();
    let _ = worker.join();
    drop(guard);

    let Ok(result) = finished else {
        tracing::error!(target: "session", "session_worker_lost");
        return Err(AppError::WorkerLost);
    };

    match result {
        Ok(invocations) => {
            tracing::info!(target: "session", steps = invocations.len(), "session_finished");
            Ok(replay::assemble(&descriptor, &invocations))
        }
        Err(e) => {
            tracing::error!(target: "session", error = %e, "session_failed");
            Err(e.into())
        }
    }
}
