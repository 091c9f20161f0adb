//! Message types for actor communication.
//!
//! These enums define the protocol between the input thread and the
//! session loop.

/// What a key press asks the session to do.
///
/// Key identity is resolved to one of these classes by the keymap, so
/// the session dispatches on intent rather than on raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// End the session and print the replay line.
    Quit,
    /// Revert the last successful command.
    Undo,
    /// Run the input line.
    Submit,
    /// Insert a printable character at the cursor.
    Insert(char),
    /// Cursor to the start of the line.
    MoveToStart,
    /// Cursor to the end of the line.
    MoveToEnd,
    /// Cursor one character left.
    StepBackward,
    /// Cursor one character right.
    StepForward,
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Recall an older submitted line.
    HistoryUp,
    /// Recall a newer submitted line.
    HistoryDown,
    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key or resize mapped to an action.
    Action(Action),

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}
