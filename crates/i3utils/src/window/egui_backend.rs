//! Desktop backend built on eframe/egui
//!
//! `eframe::run_native` creates the native window, blocks in the toolkit's
//! event loop, and returns once the window has closed. The dialog state is
//! moved into the running app behind a mutex and moved back out afterwards.

use std::sync::{Arc, Mutex};

use super::backend::{WindowBackend, WindowSettings};
use super::content::WindowContent;
use super::dialog::DialogState;
use super::events::{Key, LoopControl, WindowEvent};
use super::WindowError;

/// Production backend drawing dialogs with egui
#[derive(Debug)]
pub struct EguiBackend {
    _private: (),
}

impl EguiBackend {
    /// Create the backend, checking that a display server is reachable
    ///
    /// # Errors
    /// Returns [`WindowError::ResourceUnavailable`] when no display is set.
    pub fn new() -> Result<Self, WindowError> {
        probe_display()?;
        Ok(Self { _private: () })
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn probe_display() -> Result<(), WindowError> {
    let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()));

    if has_display {
        Ok(())
    } else {
        Err(WindowError::ResourceUnavailable(
            "no display server: neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
        ))
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn probe_display() -> Result<(), WindowError> {
    Ok(())
}

impl WindowBackend for EguiBackend {
    fn name(&self) -> &'static str {
        "egui"
    }

    fn run(
        &mut self,
        settings: &WindowSettings,
        state: &mut DialogState,
    ) -> Result<(), WindowError> {
        let title = state.title().to_string();
        let options = native_options(settings, &title);
        let shared = Arc::new(Mutex::new(std::mem::take(state)));
        let app = DialogApp {
            state: Arc::clone(&shared),
            shown_title: title,
        };

        let result = eframe::run_native(
            &settings.app_id,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        );

        let mut finished = shared.lock().map_err(|_| WindowError::StatePoisoned)?;
        *state = std::mem::take(&mut *finished);
        drop(finished);

        result.map_err(|e| WindowError::ResourceUnavailable(format!("eframe error: {e}")))
    }
}

fn native_options(settings: &WindowSettings, title: &str) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(title)
        .with_app_id(settings.app_id.clone())
        .with_inner_size([settings.width, settings.height])
        .with_resizable(settings.resizable);

    if settings.dialog_hint {
        viewport = viewport.with_window_type(egui::viewport::X11WindowType::Dialog);
    }

    eframe::NativeOptions {
        viewport,
        centered: settings.centered,
        ..Default::default()
    }
}

/// Keys the dialog logic needs from egui
///
/// Text editing keys stay with the entry widget, which edits the command
/// buffer directly.
fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Escape => Some(Key::Escape),
        egui::Key::Enter => Some(Key::Enter),
        _ => None,
    }
}

fn collect_events(ctx: &egui::Context) -> Vec<WindowEvent> {
    ctx.input(|input| {
        let mut events = Vec::new();
        if input.viewport().close_requested() {
            events.push(WindowEvent::CloseRequested);
        }
        for event in &input.events {
            if let egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } = event
            {
                if let Some(key) = map_key(*key) {
                    events.push(WindowEvent::KeyPressed(key));
                }
            }
        }
        events
    })
}

struct DialogApp {
    state: Arc<Mutex<DialogState>>,
    shown_title: String,
}

/// Whether the command entry should take keyboard focus this frame
///
/// egui drops focus from a single-line entry on Enter; an ignored blank
/// submit must not leave a keyboard-only user without an input target.
const fn entry_needs_focus(has_focus: bool, terminated: bool) -> bool {
    !has_focus && !terminated
}

impl eframe::App for DialogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Ok(mut state) = self.state.lock() else {
            log::error!("Dialog state poisoned, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        };

        if self.shown_title != state.title() {
            self.shown_title = state.title().to_string();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.shown_title.clone()));
        }

        for event in collect_events(ctx) {
            if state.handle_event(&event) == LoopControl::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                break;
            }
        }

        let terminated = state.is_terminated();
        egui::CentralPanel::default().show(ctx, |ui| match state.content_mut() {
            WindowContent::Empty => {}
            WindowContent::Message(view) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut text = view.text();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .interactive(false)
                            .desired_width(f32::INFINITY),
                    );
                });
            }
            WindowContent::Command(entry) => {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut entry.text).desired_width(f32::INFINITY),
                );
                if entry_needs_focus(response.has_focus(), terminated) {
                    response.request_focus();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dialog_keys_are_mapped() {
        assert_eq!(map_key(egui::Key::Escape), Some(Key::Escape));
        assert_eq!(map_key(egui::Key::Enter), Some(Key::Enter));
        assert_eq!(map_key(egui::Key::Backspace), None);
        assert_eq!(map_key(egui::Key::A), None);
    }

    #[test]
    fn test_entry_refocused_until_terminated() {
        assert!(entry_needs_focus(false, false));
        assert!(!entry_needs_focus(true, false));
        assert!(!entry_needs_focus(false, true));
    }

    #[test]
    fn test_native_options_follow_settings() {
        let settings = WindowSettings {
            width: 300.0,
            height: 90.0,
            centered: true,
            resizable: false,
            dialog_hint: true,
            app_id: "i3utils".to_string(),
        };

        let options = native_options(&settings, "i3utils - Test");
        assert!(options.centered);
        assert_eq!(options.viewport.title.as_deref(), Some("i3utils - Test"));
        assert_eq!(options.viewport.resizable, Some(false));
    }
}
