//! # i3utils
//!
//! Small building blocks for an i3 window-manager helper tool.
//!
//! ## Features
//!
//! - **Streams**: a forward-only "has more / take next" cursor over an in-memory sequence
//! - **Dialogs**: centered, dialog-hinted windows that show a message or accept a command
//! - **Configuration**: TOML or RON files with defaults for every field
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use i3utils::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = MessageWindow::new("Notice", "Hello from i3utils")?;
//!     let outcome = window.run()?;
//!     println!("closed by {:?}", outcome.reason);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod stream;
pub mod window;

/// Common imports for helper users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, HelperConfig, LoggingConfig, WindowConfig},
        stream::{ListStream, Stream},
        window::{
            BaseWindow, CommandWindow, Dialog, EguiBackend, HeadlessBackend, Key,
            MessageWindow, RunOutcome, TerminationReason, WindowBackend, WindowError,
            WindowEvent,
        },
    };
}
