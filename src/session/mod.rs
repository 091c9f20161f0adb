//! Session: ties the editor, journal, pipeline and renderer together.
//!
//! ```text
//!  KeySource ──Action──▶ Session::handle ──▶ LineEditor / Journal / Pipeline
//!                             │
//!                             └──View──▶ Renderer
//! ```

mod controller;
mod keys;

pub use controller::{Session, SessionState, PROMPT};
pub use keys::{KeySource, ScriptedKeys};
