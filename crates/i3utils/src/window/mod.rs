//! Dialog window subsystem
//!
//! Small desktop dialogs for the helper: a message display and a command
//! prompt, both centered and hinted to the window manager as dialogs.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │  MessageWindow / CommandWindow  │ ← Variants (message.rs)
//! └─────────────┬───────────────────┘
//!               │ Compose
//!        ┌──────▼──────┐
//!        │ BaseWindow  │ ← Title, lifecycle, event rules (dialog.rs)
//!        └──────┬──────┘
//!               │ Drives
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Toolkit contract (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ EguiBackend           │ ← Desktop toolkit (egui_backend.rs)
//!   │ HeadlessBackend       │ ← Scripted events (headless.rs)
//!   └───────────────────────┘
//! ```
//!
//! Only one dialog can own the toolkit's event loop at a time; see
//! [`event_loop`].

pub mod backend;
pub mod content;
pub mod dialog;
pub mod egui_backend;
pub mod event_loop;
pub mod events;
pub mod headless;
pub mod message;

use thiserror::Error;

pub use backend::{WindowBackend, WindowSettings};
pub use content::{CommandEntry, TextView, WindowContent};
pub use dialog::{BaseWindow, Dialog, DialogState, Lifecycle, RunOutcome};
pub use egui_backend::EguiBackend;
pub use event_loop::EventLoopGuard;
pub use events::{Key, LoopControl, TerminationReason, WindowEvent};
pub use headless::HeadlessBackend;
pub use message::{CommandWindow, MessageWindow};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The GUI toolkit could not be started
    #[error("Window toolkit unavailable: {0}")]
    ResourceUnavailable(String),

    /// Another dialog already owns the event loop
    #[error("Another dialog is already running its event loop")]
    EventLoopBusy,

    /// The window already ran and cannot be shown again
    #[error("Window has already terminated")]
    AlreadyTerminated,

    /// A scripted event source ended before the dialog terminated
    #[error("Event source exhausted before the dialog terminated")]
    EventSourceExhausted,

    /// Dialog state was left unusable by a panic in a toolkit callback
    #[error("Dialog state poisoned")]
    StatePoisoned,
}
