//! Error types for mindmend

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mindmend application
#[derive(Debug, Error)]
pub enum MindmendError {
    #[error("Not a mindmend journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Unknown mood: '{0}'")]
    UnknownMood(String),

    #[error("No entry at position {0}")]
    EntryNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MindmendError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MindmendError::NotJournalDirectory(_) => 2,
            MindmendError::UnknownMood(_) => 3,
            MindmendError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MindmendError::NotJournalDirectory(path) => {
                format!(
                    "Not a mindmend journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'mindmend init' in this directory to create a new journal\n\
                    • Navigate to an existing mindmend journal\n\
                    • Set MINDMEND_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MindmendError::UnknownMood(mood) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods:\n\
                    • happy, sad, anxious, stressed, angry, tired, neutral\n\n\
                    Examples:\n\
                    mindmend log happy\n\
                    mindmend show anxious\n\n\
                    Use --any-mood to log an unlisted mood with neutral content",
                    mood
                )
            }
            MindmendError::EntryNotFound(position) => {
                format!(
                    "No entry at position {}\n\n\
                    Suggestions:\n\
                    • Run 'mindmend list --all' to see every entry and its position\n\
                    • Positions start at 1 with the newest entry",
                    position
                )
            }
            MindmendError::Config(msg) => {
                if msg.contains("display_limit") || msg.contains("max_entries") {
                    format!(
                        "{}\n\n\
                        Examples:\n\
                        mindmend config display_limit 5\n\
                        mindmend config max_entries 200\n\
                        mindmend config max_entries none",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MindmendError
pub type Result<T> = std::result::Result<T, MindmendError>;
