//! Widgets a dialog can hold as its sole content

/// The single widget attached to a dialog window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WindowContent {
    /// Nothing attached
    #[default]
    Empty,
    /// Read-only text display
    Message(TextView),
    /// Single-line command entry
    Command(CommandEntry),
}

impl WindowContent {
    /// The command entry, if this content accepts commands
    pub fn command_entry_mut(&mut self) -> Option<&mut CommandEntry> {
        match self {
            Self::Command(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Read-only, non-focusable text display
///
/// The text is fixed at construction; there is no way to change it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    text: String,
}

impl TextView {
    /// Create a display showing `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Always `false`: the text cannot be edited
    pub const fn is_editable(&self) -> bool {
        false
    }

    /// Always `false`: no text cursor is drawn
    pub const fn is_cursor_visible(&self) -> bool {
        false
    }
}

/// Editable single-line command entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandEntry {
    /// Current entry text
    pub text: String,
}

impl CommandEntry {
    /// Append typed text
    pub fn insert(&mut self, text: &str) {
        // Single line only
        self.text.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Entry text with surrounding whitespace removed
    pub fn command(&self) -> &str {
        self.text.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_view_is_read_only() {
        let view = TextView::new("Hello");
        assert_eq!(view.text(), "Hello");
        assert!(!view.is_editable());
        assert!(!view.is_cursor_visible());
    }

    #[test]
    fn test_command_entry_editing() {
        let mut entry = CommandEntry::default();
        entry.insert("  ls -l\n");
        entry.backspace();
        entry.insert("a");

        assert_eq!(entry.text, "  ls -a");
        assert_eq!(entry.command(), "ls -a");
    }

    #[test]
    fn test_backspace_on_empty_entry() {
        let mut entry = CommandEntry::default();
        entry.backspace();
        assert!(entry.text.is_empty());
    }

    #[test]
    fn test_only_command_content_has_an_entry() {
        assert!(WindowContent::Empty.command_entry_mut().is_none());
        assert!(WindowContent::Message(TextView::new("x")).command_entry_mut().is_none());
        assert!(WindowContent::Command(CommandEntry::default())
            .command_entry_mut()
            .is_some());
    }
}
