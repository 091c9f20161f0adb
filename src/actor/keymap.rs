//! Keymap: terminal events to [`Action`]s.
//!
//! | Key                 | Action        |
//! |---------------------|---------------|
//! | Esc, Ctrl+C         | Quit          |
//! | Ctrl+Z              | Undo          |
//! | Enter               | Submit        |
//! | Ctrl+A, Home        | MoveToStart   |
//! | Ctrl+E, End         | MoveToEnd     |
//! | Left, Ctrl+B        | StepBackward  |
//! | Right, Ctrl+F       | StepForward   |
//! | Up / Down           | HistoryUp / HistoryDown |
//! | Backspace           | Backspace     |
//! | Delete, Ctrl+D      | Delete        |
//! | printable character | Insert        |

use super::messages::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal event to an action. Unbound events yield `None`.
pub fn action_for_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

/// Map a key press to an action.
///
/// Only press events count; release and repeat reports (sent by
/// terminals with the kitty keyboard protocol) are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('z') => Some(Action::Undo),
            KeyCode::Char('a') => Some(Action::MoveToStart),
            KeyCode::Char('e') => Some(Action::MoveToEnd),
            KeyCode::Char('b') => Some(Action::StepBackward),
            KeyCode::Char('f') => Some(Action::StepForward),
            KeyCode::Char('d') => Some(Action::Delete),
            _ => None,
        };
    }

    Some(match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Submit,
        KeyCode::Home => Action::MoveToStart,
        KeyCode::End => Action::MoveToEnd,
        KeyCode::Left => Action::StepBackward,
        KeyCode::Right => Action::StepForward,
        KeyCode::Up => Action::HistoryUp,
        KeyCode::Down => Action::HistoryDown,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) && !c.is_control() => {
            Action::Insert(c)
        }
        _ => return None,
    })
}
