//! `i3utils` command-line front end
//!
//! Pops up a message dialog or a command prompt from scripts and i3 key
//! bindings. A submitted command is printed to stdout for the caller to act
//! on; this tool never executes it.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use i3utils::config::HelperConfig;
use i3utils::foundation::logging;
use i3utils::window::{
    CommandWindow, Dialog, EguiBackend, MessageWindow, RunOutcome, TerminationReason,
};

#[derive(Parser, Debug)]
#[command(name = "i3utils", about = "Small dialogs for i3 helper scripts")]
struct Cli {
    /// Configuration file (.toml or .ron)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a read-only message
    Message {
        /// Window title, shown after the configured prefix
        #[arg(short, long, default_value = "message")]
        title: String,

        /// Message text; read from stdin when omitted or "-"
        text: Option<String>,
    },
    /// Prompt for a command and print it on submit
    Command {
        /// Window title, shown after the configured prefix
        #[arg(short, long)]
        title: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = HelperConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    logging::init_with_level(config.logging.level_filter());

    log::debug!("Starting i3utils with {:?}", cli.command);

    match cli.command {
        Command::Message { title, text } => {
            let text = resolve_text(text, std::io::stdin())?;
            let backend = EguiBackend::new()?;
            let mut window = MessageWindow::with_backend(backend, &config.window, &title, &text);
            window.run()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Command { title } => {
            let backend = EguiBackend::new()?;
            let mut window = CommandWindow::with_backend(backend, &config.window);
            if let Some(title) = title {
                window.set_title(&title);
            }

            let outcome = window.run()?;
            let (status, command) = exit_status(&outcome);
            match command {
                Some(command) => println!("{command}"),
                None => log::info!("No command entered ({:?})", outcome.reason),
            }
            Ok(ExitCode::from(status))
        }
    }
}

/// Process status for a finished command dialog, plus the command to print
///
/// Only a submitted command succeeds; Escape or closing the window exits 1.
fn exit_status(outcome: &RunOutcome) -> (u8, Option<&str>) {
    match (outcome.reason, outcome.command.as_deref()) {
        (TerminationReason::Submitted, Some(command)) => (0, Some(command)),
        _ => (1, None),
    }
}

/// Message text from the argument, or from `input` when omitted or `-`
fn resolve_text(text: Option<String>, mut input: impl Read) -> Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .context("Failed to read message text from stdin")?;
            Ok(buffer.trim_end().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(reason: TerminationReason, command: Option<&str>) -> RunOutcome {
        RunOutcome {
            reason,
            command: command.map(str::to_string),
        }
    }

    #[test]
    fn test_literal_text_ignores_input() {
        let text = resolve_text(Some("Hello".to_string()), "from stdin".as_bytes()).unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_dash_reads_input() {
        let text = resolve_text(Some("-".to_string()), "line one\nline two\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_missing_text_reads_input() {
        let text = resolve_text(None, "piped\n\n".as_bytes()).unwrap();
        assert_eq!(text, "piped");
    }

    #[test]
    fn test_submitted_command_succeeds() {
        let submitted = outcome(TerminationReason::Submitted, Some("i3-msg reload"));
        assert_eq!(exit_status(&submitted), (0, Some("i3-msg reload")));
    }

    #[test]
    fn test_escape_and_close_fail_without_output() {
        let escaped = outcome(TerminationReason::Escaped, None);
        let closed = outcome(TerminationReason::Closed, None);

        assert_eq!(exit_status(&escaped), (1, None));
        assert_eq!(exit_status(&closed), (1, None));
    }
}
