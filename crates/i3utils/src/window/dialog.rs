//! Dialog windows built by composition over a toolkit backend
//!
//! [`BaseWindow`] owns a [`WindowBackend`], the window hints, and a
//! [`DialogState`] holding the title and the single content widget. The
//! event rules (close and Escape end the loop, Enter submits a command) live
//! in [`DialogState::handle_event`] so every backend behaves the same way.
//!
//! A window moves through [`Lifecycle::Constructed`], [`Lifecycle::Running`]
//! and [`Lifecycle::Terminated`]; the last one is absorbing, so a window can
//! only be run once.

use super::backend::{WindowBackend, WindowSettings};
use super::content::WindowContent;
use super::event_loop::EventLoopGuard;
use super::events::{Key, LoopControl, TerminationReason, WindowEvent};
use super::WindowError;
use crate::config::WindowConfig;

/// Capability shared by every dialog variant
pub trait Dialog {
    /// Replace the title shown after the configured prefix
    fn set_title(&mut self, title: &str);

    /// Show the window and block until its event loop terminates
    ///
    /// # Errors
    /// Fails with [`WindowError::EventLoopBusy`] if another dialog is running,
    /// [`WindowError::AlreadyTerminated`] if this one already ran, or any
    /// error raised by the backend.
    fn run(&mut self) -> Result<RunOutcome, WindowError>;
}

/// Result of a dialog's event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Why the loop stopped
    pub reason: TerminationReason,
    /// Command submitted with Enter, for command dialogs
    pub command: Option<String>,
}

/// Window lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but never shown
    Constructed,
    /// Inside the event loop
    Running,
    /// Event loop finished; the window cannot run again
    Terminated,
}

/// Title, content, and termination status of a dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    title: String,
    content: WindowContent,
    termination: Option<TerminationReason>,
    submitted: Option<String>,
}

impl DialogState {
    /// Create a state with a full (already prefixed) title
    pub fn new(title: impl Into<String>, content: WindowContent) -> Self {
        Self {
            title: title.into(),
            content,
            termination: None,
            submitted: None,
        }
    }

    /// Full window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The window's content widget
    pub const fn content(&self) -> &WindowContent {
        &self.content
    }

    /// Mutable access for backends whose widgets edit the content in place
    pub fn content_mut(&mut self) -> &mut WindowContent {
        &mut self.content
    }

    /// Why the loop stopped, once it has
    pub const fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    /// Whether a terminal event has been handled
    pub const fn is_terminated(&self) -> bool {
        self.termination.is_some()
    }

    /// Submitted command, if any
    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    /// Apply one event and report whether the loop should keep running
    ///
    /// Events arriving after termination are ignored; the first terminal
    /// event decides the outcome.
    pub fn handle_event(&mut self, event: &WindowEvent) -> LoopControl {
        if self.is_terminated() {
            return LoopControl::Quit;
        }

        match event {
            WindowEvent::CloseRequested => self.terminate(TerminationReason::Closed),
            WindowEvent::KeyPressed(Key::Escape) => self.terminate(TerminationReason::Escaped),
            WindowEvent::KeyPressed(Key::Enter) => self.submit(),
            WindowEvent::KeyPressed(Key::Backspace) => {
                if let Some(entry) = self.content.command_entry_mut() {
                    entry.backspace();
                }
                LoopControl::Continue
            }
            WindowEvent::KeyPressed(Key::Tab) => LoopControl::Continue,
            WindowEvent::TextInput(text) => {
                if let Some(entry) = self.content.command_entry_mut() {
                    entry.insert(text);
                }
                LoopControl::Continue
            }
        }
    }

    fn submit(&mut self) -> LoopControl {
        let Some(entry) = self.content.command_entry_mut() else {
            return LoopControl::Continue;
        };

        let command = entry.command();
        if command.is_empty() {
            log::debug!("Ignoring Enter on an empty command entry");
            return LoopControl::Continue;
        }

        self.submitted = Some(command.to_string());
        self.terminate(TerminationReason::Submitted)
    }

    fn terminate(&mut self, reason: TerminationReason) -> LoopControl {
        log::debug!("Dialog '{}' terminating: {reason:?}", self.title);
        self.termination = Some(reason);
        LoopControl::Quit
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

/// Centered, dialog-hinted window driven by a toolkit backend
pub struct BaseWindow<B: WindowBackend> {
    backend: B,
    config: WindowConfig,
    settings: WindowSettings,
    state: DialogState,
    lifecycle: Lifecycle,
}

impl<B: WindowBackend> BaseWindow<B> {
    /// Create an empty window titled with the configured default title
    pub fn new(backend: B, config: &WindowConfig) -> Self {
        Self::with_content(backend, config, WindowContent::Empty)
    }

    /// Create a window holding `content` as its sole widget
    pub fn with_content(backend: B, config: &WindowConfig, content: WindowContent) -> Self {
        let title = config.full_title(&config.default_title);
        Self {
            backend,
            config: config.clone(),
            settings: WindowSettings::from(config),
            state: DialogState::new(title, content),
            lifecycle: Lifecycle::Constructed,
        }
    }

    /// Full window title, including the prefix
    pub fn title(&self) -> &str {
        self.state.title()
    }

    /// Current lifecycle stage
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The window's content widget
    pub const fn content(&self) -> &WindowContent {
        self.state.content()
    }

    /// Window hints handed to the backend
    pub const fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    /// The backend driving this window
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: WindowBackend> Dialog for BaseWindow<B> {
    fn set_title(&mut self, title: &str) {
        let full = self.config.full_title(title);
        log::debug!("Retitling dialog to '{full}'");
        self.state.set_title(full);
    }

    fn run(&mut self) -> Result<RunOutcome, WindowError> {
        if self.lifecycle == Lifecycle::Terminated {
            return Err(WindowError::AlreadyTerminated);
        }

        let _guard = EventLoopGuard::acquire()?;
        self.lifecycle = Lifecycle::Running;
        log::info!(
            "Showing dialog '{}' ({} backend)",
            self.state.title(),
            self.backend.name()
        );

        let result = self.backend.run(&self.settings, &mut self.state);
        self.lifecycle = Lifecycle::Terminated;
        result?;

        // A toolkit can end its loop on its own (e.g. the window was
        // destroyed externally); that counts as a close.
        let reason = self.state.termination().unwrap_or(TerminationReason::Closed);
        log::info!("Dialog '{}' finished: {reason:?}", self.state.title());

        Ok(RunOutcome {
            reason,
            command: self.state.submitted().map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::content::{CommandEntry, TextView};

    fn command_state() -> DialogState {
        DialogState::new("cmd", WindowContent::Command(CommandEntry::default()))
    }

    #[test]
    fn test_escape_terminates() {
        let mut state = DialogState::new("t", WindowContent::Message(TextView::new("Hello")));
        assert_eq!(state.handle_event(&WindowEvent::KeyPressed(Key::Escape)), LoopControl::Quit);
        assert_eq!(state.termination(), Some(TerminationReason::Escaped));
    }

    #[test]
    fn test_close_terminates() {
        let mut state = DialogState::default();
        assert_eq!(state.handle_event(&WindowEvent::CloseRequested), LoopControl::Quit);
        assert_eq!(state.termination(), Some(TerminationReason::Closed));
    }

    #[test]
    fn test_other_keys_continue() {
        let mut state = DialogState::new("t", WindowContent::Message(TextView::new("Hello")));
        for key in [Key::Enter, Key::Tab, Key::Backspace] {
            assert_eq!(state.handle_event(&WindowEvent::KeyPressed(key)), LoopControl::Continue);
        }
        assert_eq!(
            state.handle_event(&WindowEvent::TextInput("q".to_string())),
            LoopControl::Continue
        );
        assert!(!state.is_terminated());
        assert_eq!(state.content(), &WindowContent::Message(TextView::new("Hello")));
    }

    #[test]
    fn test_first_terminal_event_wins() {
        let mut state = DialogState::default();
        state.handle_event(&WindowEvent::KeyPressed(Key::Escape));
        assert_eq!(state.handle_event(&WindowEvent::CloseRequested), LoopControl::Quit);
        assert_eq!(state.termination(), Some(TerminationReason::Escaped));
    }

    #[test]
    fn test_command_typing_and_submit() {
        let mut state = command_state();
        state.handle_event(&WindowEvent::TextInput("firefoz".to_string()));
        state.handle_event(&WindowEvent::KeyPressed(Key::Backspace));
        state.handle_event(&WindowEvent::TextInput("x".to_string()));

        assert_eq!(state.handle_event(&WindowEvent::KeyPressed(Key::Enter)), LoopControl::Quit);
        assert_eq!(state.termination(), Some(TerminationReason::Submitted));
        assert_eq!(state.submitted(), Some("firefox"));
    }

    #[test]
    fn test_enter_on_blank_command_is_ignored() {
        let mut state = command_state();
        state.handle_event(&WindowEvent::TextInput("   ".to_string()));

        assert_eq!(state.handle_event(&WindowEvent::KeyPressed(Key::Enter)), LoopControl::Continue);
        assert!(!state.is_terminated());
        assert_eq!(state.submitted(), None);
    }

    #[test]
    fn test_escape_discards_typed_command() {
        let mut state = command_state();
        state.handle_event(&WindowEvent::TextInput("reboot".to_string()));
        state.handle_event(&WindowEvent::KeyPressed(Key::Escape));

        assert_eq!(state.termination(), Some(TerminationReason::Escaped));
        assert_eq!(state.submitted(), None);
    }
}
