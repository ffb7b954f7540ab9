//! SPINPICK - terminal random choice picker
//!
//! Maintains a small ordered list of text options, picks one uniformly
//! at random with an animated "spin" reveal, and saves/loads the list
//! as JSON. Ships a ratatui TUI and a plain line-mode frontend over
//! the same core.

use std::fmt;

// Public re-exports
pub mod app;
pub mod chooser;
pub mod config;
pub mod plain;
pub mod store;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum SpinPickError {
    /// Option text was empty after trimming
    Validation(String),
    /// Positional removal outside the list bounds
    Index { index: usize, len: usize },
    /// Value-based removal found no matching option
    NotFound(String),
    /// Saved options file is structurally malformed
    Format(String),
    /// Pick or spin attempted on an empty list
    EmptySet,
    /// I/O operation failed
    Io(std::io::Error),
    /// Configuration validation or parsing error
    Config(String),
    /// Saved-list storage error
    Storage(String),
    /// TUI rendering or interaction error
    Tui(String),
}

impl fmt::Display for SpinPickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinPickError::Validation(msg) => write!(f, "Invalid option: {}", msg),
            SpinPickError::Index { index, len } => {
                write!(f, "Index {} out of bounds for {} options", index, len)
            }
            SpinPickError::NotFound(value) => write!(f, "No such option: {}", value),
            SpinPickError::Format(msg) => write!(f, "Bad options file: {}", msg),
            SpinPickError::EmptySet => write!(f, "No options to choose from"),
            SpinPickError::Io(err) => write!(f, "I/O error: {}", err),
            SpinPickError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SpinPickError::Storage(msg) => write!(f, "Storage error: {}", msg),
            SpinPickError::Tui(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for SpinPickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpinPickError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpinPickError {
    fn from(err: std::io::Error) -> Self {
        SpinPickError::Io(err)
    }
}

impl From<serde_json::Error> for SpinPickError {
    fn from(err: serde_json::Error) -> Self {
        SpinPickError::Format(err.to_string())
    }
}

impl From<toml::de::Error> for SpinPickError {
    fn from(err: toml::de::Error) -> Self {
        SpinPickError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for SpinPickError {
    fn from(err: toml::ser::Error) -> Self {
        SpinPickError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for spinpick operations
pub type Result<T> = std::result::Result<T, SpinPickError>;

/// Error handling utilities
pub mod error {
    use super::SpinPickError;

    /// Convert an error to the message a frontend shows the user.
    /// Each error kind maps to its own distinct message.
    pub fn user_friendly_message(error: &SpinPickError) -> String {
        match error {
            SpinPickError::Validation(_) => {
                "Enter a non-empty option before adding.".to_string()
            }
            SpinPickError::Index { index, len } => {
                // Positions are 1-based everywhere the user sees them
                format!("Nothing to remove at position {} ({} options).", index + 1, len)
            }
            SpinPickError::NotFound(value) => {
                format!("\"{}\" is not in the list.", value)
            }
            SpinPickError::Format(_) => {
                "That file is not a saved options list.".to_string()
            }
            SpinPickError::EmptySet => "Add some options first.".to_string(),
            SpinPickError::Io(_) => "Could not read or write the file.".to_string(),
            SpinPickError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            SpinPickError::Storage(_) => {
                "Could not access the saved options folder.".to_string()
            }
            SpinPickError::Tui(_) => "Terminal display error.".to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "spinpick";
pub const CONFIG_FILE: &str = "spinpick.toml";
pub const SAVE_DIR: &str = "saved_options";
