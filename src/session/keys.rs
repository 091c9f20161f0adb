//! Key sources: where the session gets its next [`Action`] from.

use crate::actor::{Action, InputEvent};
use crate::error::SessionError;
use crossbeam_channel::Receiver;
use std::collections::VecDeque;

/// A blocking supplier of actions.
pub trait KeySource {
    /// Wait for the next action.
    fn next_action(&mut self) -> Result<Action, SessionError>;
}

impl KeySource for Receiver<InputEvent> {
    fn next_action(&mut self) -> Result<Action, SessionError> {
        match self.recv() {
            Ok(InputEvent::Action(action)) => Ok(action),
            Ok(InputEvent::Error(message)) => Err(SessionError::Input(message)),
            Ok(InputEvent::Shutdown) | Err(_) => Err(SessionError::Disconnected),
        }
    }
}

/// A fixed list of actions, for driving a session without a terminal.
///
/// Once the list is exhausted the source reports
/// [`SessionError::Disconnected`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    actions: VecDeque<Action>,
}

impl ScriptedKeys {
    /// Create a script from actions.
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Append one `Insert` per character of `text`.
    #[must_use]
    pub fn typed(mut self, text: &str) -> Self {
        self.actions.extend(text.chars().map(Action::Insert));
        self
    }

    /// Append one action.
    #[must_use]
    pub fn then(mut self, action: Action) -> Self {
        self.actions.push_back(action);
        self
    }

    /// Actions not consumed yet.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_action(&mut self) -> Result<Action, SessionError> {
        self.actions.pop_front().ok_or(SessionError::Disconnected)
    }
}
