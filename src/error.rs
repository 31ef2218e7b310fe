//! Error types for flatwiki

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the wiki
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Not a flatwiki directory: {0}")]
    NotWikiDirectory(PathBuf),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WikiError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WikiError::NotWikiDirectory(_) => 2,
            WikiError::InvalidTitle(_) => 3,
            WikiError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WikiError::NotWikiDirectory(path) => {
                format!(
                    "Not a flatwiki directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'flatwiki init' in this directory to create a new wiki\n\
                    • Navigate to an existing wiki directory\n\
                    • Set FLATWIKI_ROOT environment variable to your wiki path",
                    path.display()
                )
            }
            WikiError::InvalidTitle(title) => {
                format!(
                    "Invalid title: '{}'\n\n\
                    Titles must not be empty, start with '.', or contain '/' or '\\'.",
                    title
                )
            }
            WikiError::EntryNotFound(title) => {
                format!(
                    "No entry found for title: '{}'\n\n\
                    Suggestions:\n\
                    • Titles are matched exactly (e.g., 'Paris', not 'paris')\n\
                    • Use 'flatwiki list' to see available entries\n\
                    • Use 'flatwiki list <query>' to search by substring",
                    title
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WikiError
pub type Result<T> = std::result::Result<T, WikiError>;
