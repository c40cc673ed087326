//! Error types for moodlog

use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Entry text cannot be empty")]
    EmptyEntry,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Failed to initialize analysis engines: {0}")]
    EngineInit(String),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::Config(_) | MoodlogError::TomlDeserialize(_) => 2,
            MoodlogError::EngineInit(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::EmptyEntry => "Entry text cannot be empty\n\n\
                Example:\n\
                moodlog add \"crushing it at work today\""
                .to_string(),
            MoodlogError::Config(msg) => format!(
                "{}\n\n\
                Suggestions:\n\
                • Check the data_file value in moodlog.toml\n\
                • Set MOODLOG_DATA to the journal file you want to use",
                msg
            ),
            MoodlogError::Storage(msg) => format!(
                "{}\n\n\
                Suggestions:\n\
                • Check that the journal directory is writable\n\
                • Point MOODLOG_DATA at a writable location",
                msg
            ),
            MoodlogError::TomlDeserialize(e) => format!(
                "Failed to parse moodlog.toml: {}\n\n\
                Expected format:\n\
                data_file = \"data/journal.json\"",
                e
            ),
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
