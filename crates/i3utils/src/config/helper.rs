//! Helper tool settings: dialog appearance and logging

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::logging::{self, LevelFilter};

/// Top-level configuration for the helper tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Dialog window settings
    pub window: WindowConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config for HelperConfig {}

impl HelperConfig {
    /// Load the configuration at `path`, or the defaults when no path is given
    ///
    /// A path that is given but cannot be read or parsed is an error; the
    /// defaults are only used when the caller has no file at all.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                log::debug!("Loaded helper configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Appearance of every dialog window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Text placed in front of every window title
    pub title_prefix: String,
    /// Title used until a window is retitled
    pub default_title: String,
    /// Initial inner width in logical pixels
    pub width: f32,
    /// Initial inner height in logical pixels
    pub height: f32,
    /// Center the window on screen
    pub centered: bool,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Application id reported to the window manager
    pub app_id: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title_prefix: "i3utils - ".to_string(),
            default_title: "enter a command to execute:".to_string(),
            width: 480.0,
            height: 120.0,
            centered: true,
            resizable: false,
            app_id: "i3utils".to_string(),
        }
    }
}

impl WindowConfig {
    /// Full window title for `title`, with the configured prefix
    pub fn full_title(&self, title: &str) -> String {
        format!("{}{}", self.title_prefix, title)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level name, overridable through `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        logging::parse_level(&self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_title() {
        let config = WindowConfig::default();
        assert_eq!(
            config.full_title(&config.default_title),
            "i3utils - enter a command to execute:"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: HelperConfig = toml::from_str(
            r#"
            [window]
            title_prefix = "helper: "
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title_prefix, "helper: ");
        assert_eq!(config.window.width, 480.0);
        assert!(config.window.centered);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_logging_level_filter() {
        let logging = LoggingConfig {
            level: "trace".to_string(),
        };
        assert_eq!(logging.level_filter(), LevelFilter::Trace);
        assert_eq!(LoggingConfig::default().level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = HelperConfig::load_or_default(None).unwrap();
        assert_eq!(config, HelperConfig::default());
    }
}
