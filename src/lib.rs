//! # txtmanip
//!
//! Interactive text manipulation with shell commands.
//!
//! The text is piped through allow-listed external programs one step at
//! a time. Every successful step can be undone, and on quit the session
//! is printed as an equivalent shell pipeline.
//!
//! ## Core Concepts
//!
//! - **Line editor**: single input line with a cursor that tracks both
//!   byte offset and display column, plus recall of submitted lines
//! - **Journal**: text buffer with an undo stack, paired with the log of
//!   applied command lines so the two can never drift apart
//! - **Pipeline**: tokenize, check the allow-list, run with the buffer as
//!   standard input, classify the exit status
//! - **Actor model**: a dedicated input thread feeds the session thread
//!   over a channel; the renderer only writes rows that changed
//!
//! ## Example
//!
//! ```rust,ignore
//! use txtmanip::{AllowList, Pipeline, Session, ScriptedKeys, Action};
//!
//! let pipeline = Pipeline::new(AllowList::new(["grep"]));
//! let session = Session::new(b"a\nb\nc\n".to_vec(), pipeline);
//!
//! let mut keys = ScriptedKeys::default()
//!     .typed("grep b")
//!     .then(Action::Submit)
//!     .then(Action::Quit);
//! let log = session.run(&mut keys, &mut renderer)?;
//! assert_eq!(txtmanip::replay::assemble("<source>", &log), "<source> | grep b");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod journal;
pub mod pipeline;
pub mod replay;
pub mod session;
pub mod source;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Action, InputActor, InputEvent};
pub use config::{Config, ConfigError};
pub use editor::{Cursor, InputHistory, LineEditor};
pub use error::{AppError, SessionError, StartupError};
pub use journal::{EmptyHistory, InvocationLog, Journal, TextBuffer};
pub use pipeline::{AllowList, Outcome, Pipeline, PipelineError, ProcessOutput, Spawner, SystemSpawner};
pub use session::{KeySource, ScriptedKeys, Session, SessionState};
pub use source::{Origin, Source, SourceError};
pub use terminal::{RenderError, Renderer, TerminalGuard, TerminalRenderer, View};
