//! Actor Model: the input thread and its message protocol.
//!
//! The session runs on its own worker thread and pulls [`InputEvent`]s
//! from a crossbeam channel fed by the input actor:
//!
//! ```text
//! ┌──────────────┐   InputEvent    ┌────────────────┐  Result  ┌────────┐
//! │ Input Thread │ ──────────────▶ │ Session Thread │ ───────▶ │ Driver │
//! └──────────────┘                 └────────────────┘ bounded  └────────┘
//!                                          │             (1)        │
//!                                          │ draw                   │ teardown,
//!                                          ▼                        ▼ replay line
//!                                      terminal                  stdout
//! ```

mod input;
mod keymap;
mod messages;

pub use input::InputActor;
pub use keymap::{action_for_event, action_for_key};
pub use messages::{Action, InputEvent};
