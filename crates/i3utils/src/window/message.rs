//! Ready-made dialog variants

use super::backend::WindowBackend;
use super::content::{CommandEntry, TextView, WindowContent};
use super::dialog::{BaseWindow, Dialog, RunOutcome};
use super::egui_backend::EguiBackend;
use super::WindowError;
use crate::config::WindowConfig;

/// Dialog showing a fixed, read-only message
pub struct MessageWindow<B: WindowBackend = EguiBackend> {
    base: BaseWindow<B>,
}

impl MessageWindow<EguiBackend> {
    /// Create a message window on the desktop toolkit with default settings
    ///
    /// # Errors
    /// Returns [`WindowError::ResourceUnavailable`] when no display is available.
    pub fn new(title: &str, text: &str) -> Result<Self, WindowError> {
        Ok(Self::with_backend(
            EguiBackend::new()?,
            &WindowConfig::default(),
            title,
            text,
        ))
    }
}

impl<B: WindowBackend> MessageWindow<B> {
    /// Create a message window on any backend
    pub fn with_backend(backend: B, config: &WindowConfig, title: &str, text: &str) -> Self {
        let content = WindowContent::Message(TextView::new(text));
        let mut base = BaseWindow::with_content(backend, config, content);
        base.set_title(title);
        Self { base }
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        match self.base.content() {
            WindowContent::Message(view) => view.text(),
            _ => "",
        }
    }

    /// The underlying window
    pub const fn window(&self) -> &BaseWindow<B> {
        &self.base
    }
}

impl<B: WindowBackend> Dialog for MessageWindow<B> {
    fn set_title(&mut self, title: &str) {
        self.base.set_title(title);
    }

    fn run(&mut self) -> Result<RunOutcome, WindowError> {
        self.base.run()
    }
}

/// Dialog accepting a single command line
///
/// Enter submits the entered text, which [`Dialog::run`] returns in
/// [`RunOutcome::command`]. The command is never executed here.
pub struct CommandWindow<B: WindowBackend = EguiBackend> {
    base: BaseWindow<B>,
}

impl CommandWindow<EguiBackend> {
    /// Create a command window on the desktop toolkit with default settings
    ///
    /// # Errors
    /// Returns [`WindowError::ResourceUnavailable`] when no display is available.
    pub fn new() -> Result<Self, WindowError> {
        Ok(Self::with_backend(EguiBackend::new()?, &WindowConfig::default()))
    }
}

impl<B: WindowBackend> CommandWindow<B> {
    /// Create a command window on any backend, titled with the default title
    pub fn with_backend(backend: B, config: &WindowConfig) -> Self {
        let content = WindowContent::Command(CommandEntry::default());
        Self {
            base: BaseWindow::with_content(backend, config, content),
        }
    }

    /// The underlying window
    pub const fn window(&self) -> &BaseWindow<B> {
        &self.base
    }
}

impl<B: WindowBackend> Dialog for CommandWindow<B> {
    fn set_title(&mut self, title: &str) {
        self.base.set_title(title);
    }

    fn run(&mut self) -> Result<RunOutcome, WindowError> {
        self.base.run()
    }
}
