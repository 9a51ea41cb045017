//! Backend-agnostic window toolkit trait
//!
//! This module defines the contract every toolkit backend implements. The
//! dialog types own a backend and hand it the window settings plus the
//! shared [`DialogState`]; the backend owns everything toolkit-specific.

use super::dialog::DialogState;
use super::WindowError;
use crate::config::WindowConfig;

/// Toolkit window hints applied when a dialog is shown
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Initial inner width in logical pixels
    pub width: f32,
    /// Initial inner height in logical pixels
    pub height: f32,
    /// Center the window on screen
    pub centered: bool,
    /// Allow resizing
    pub resizable: bool,
    /// Hint the window manager that this is a dialog
    pub dialog_hint: bool,
    /// Application id reported to the window manager
    pub app_id: String,
}

impl From<&WindowConfig> for WindowSettings {
    fn from(config: &WindowConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            centered: config.centered,
            resizable: config.resizable,
            dialog_hint: true,
            app_id: config.app_id.clone(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

/// Contract for window toolkit backends
///
/// A backend makes the window and its content visible, then blocks in the
/// toolkit's event loop. Every native input that matters is translated into a
/// [`WindowEvent`](super::WindowEvent) and passed to
/// [`DialogState::handle_event`]; the loop ends as soon as that returns
/// [`LoopControl::Quit`](super::LoopControl::Quit). Title changes made
/// through the state are applied to the native window.
///
/// # Thread Safety
/// Backends are not required to be `Send`; GUI toolkits generally expect to
/// stay on the thread that created them.
pub trait WindowBackend {
    /// Short backend name for logging
    fn name(&self) -> &'static str;

    /// Show the window and run the event loop until the dialog terminates
    ///
    /// # Errors
    /// Returns [`WindowError::ResourceUnavailable`] when the toolkit cannot
    /// create the window or run its loop.
    fn run(&mut self, settings: &WindowSettings, state: &mut DialogState)
        -> Result<(), WindowError>;
}

impl<B: WindowBackend + ?Sized> WindowBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run(
        &mut self,
        settings: &WindowSettings,
        state: &mut DialogState,
    ) -> Result<(), WindowError> {
        (**self).run(settings, state)
    }
}
