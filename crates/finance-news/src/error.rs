//! Error types for the finance news bot

use thiserror::Error;

/// Shown when a command name is not registered
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "❌ Perintah tidak ditemukan. Gunakan `!help_finance` untuk melihat perintah yang tersedia.";

/// Shown when a caller lacks the administrator capability
pub const MISSING_PERMISSION_MESSAGE: &str =
    "❌ Anda tidak memiliki izin untuk menggunakan perintah ini.";

/// Shown for every other command failure
pub const GENERIC_FAILURE_MESSAGE: &str = "❌ Terjadi kesalahan. Silakan coba lagi nanti.";

/// Finance news bot errors
#[derive(Debug, Error)]
pub enum NewsError {
    /// Upstream answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Payload parsed but did not have the expected shape
    #[error("Unexpected payload from {source_name}: {reason}")]
    MalformedPayload { source_name: String, reason: String },

    /// Command name not recognized
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Caller lacks the capability the command requires
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Chat platform error
    #[error("Discord error: {0}")]
    Discord(#[from] poise::serenity_prelude::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl NewsError {
    /// The localized message a chat user sees for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            NewsError::UnknownCommand(_) => UNKNOWN_COMMAND_MESSAGE,
            NewsError::MissingPermission(_) => MISSING_PERMISSION_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// Whether the error is an expected user mistake rather than a fault
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            NewsError::UnknownCommand(_) | NewsError::MissingPermission(_)
        )
    }
}

/// Result type alias for news bot operations
pub type Result<T> = std::result::Result<T, NewsError>;
