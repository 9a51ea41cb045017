//! Scripted backend that runs dialogs without a display
//!
//! Events come from a fixed script instead of a window system, which makes
//! dialog behaviour reproducible in tests and on machines with no desktop.

use super::backend::{WindowBackend, WindowSettings};
use super::dialog::DialogState;
use super::events::{LoopControl, WindowEvent};
use super::WindowError;
use crate::stream::{ListStream, Stream};

/// Backend replaying a script of [`WindowEvent`]s
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    script: ListStream<WindowEvent>,
    shown: bool,
    titles: Vec<String>,
    dispatched: usize,
}

impl HeadlessBackend {
    /// Create a backend that will deliver `events` in order
    pub fn new(events: impl IntoIterator<Item = WindowEvent>) -> Self {
        Self {
            script: events.into_iter().collect(),
            shown: false,
            titles: Vec::new(),
            dispatched: 0,
        }
    }

    /// Whether the window was made visible
    pub const fn was_shown(&self) -> bool {
        self.shown
    }

    /// Titles the window displayed, in order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of events delivered to the dialog
    pub const fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Script events that were never delivered
    pub fn undelivered(&self) -> Vec<WindowEvent> {
        self.script.clone().to_list()
    }
}

impl WindowBackend for HeadlessBackend {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn run(
        &mut self,
        settings: &WindowSettings,
        state: &mut DialogState,
    ) -> Result<(), WindowError> {
        log::debug!(
            "Headless window '{}' ({}x{}, centered: {})",
            state.title(),
            settings.width,
            settings.height,
            settings.centered
        );
        self.shown = true;
        self.titles.push(state.title().to_string());

        while let Some(event) = self.script.next() {
            self.dispatched += 1;
            if state.handle_event(&event) == LoopControl::Quit {
                return Ok(());
            }
        }

        Err(WindowError::EventSourceExhausted)
    }
}
