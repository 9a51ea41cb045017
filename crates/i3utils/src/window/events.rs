//! Toolkit-independent window events
//!
//! Backends translate their native input into these events before handing
//! them to the dialog logic, so the rules for closing a dialog live in one
//! place regardless of which toolkit drew it.

/// Keys the dialogs react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key
    Escape,
    /// Enter / Return key
    Enter,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
}

/// Input delivered to a running dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window manager or the user asked the window to close
    CloseRequested,
    /// A key was pressed (repeats are not reported)
    KeyPressed(Key),
    /// Text typed into the focused widget
    TextInput(String),
}

/// Why a dialog's event loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The window was closed
    Closed,
    /// Escape was pressed
    Escaped,
    /// A command was submitted with Enter
    Submitted,
}

/// Whether the event loop keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep dispatching events
    Continue,
    /// Leave the event loop
    Quit,
}
