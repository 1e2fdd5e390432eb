//! Error types for sinaxar

use thiserror::Error;

/// Main error type for the sinaxar application
#[derive(Debug, Error)]
pub enum SinaxarError {
    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    #[error("{0}")]
    UnknownFeastKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SinaxarError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SinaxarError::InvalidDateReference(_) => 3,
            SinaxarError::InvalidMonth(_) => 4,
            SinaxarError::UnknownFeastKind(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SinaxarError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • in N days (e.g., in 40 days)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-08-15)\n\n\
                    Examples:\n\
                    sinaxar today\n\
                    sinaxar next friday\n\
                    sinaxar 2025-04-18",
                    ref_str
                )
            }
            SinaxarError::InvalidMonth(month) => {
                format!(
                    "Invalid month: {}\n\n\
                    Months are numbered 1 through 12.\n\
                    Example: sinaxar month 8",
                    month
                )
            }
            SinaxarError::UnknownFeastKind(msg) => {
                format!(
                    "{}\n\n\
                    Example: sinaxar month 10 --kind saint",
                    msg
                )
            }
            SinaxarError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the TOML syntax of your config file\n\
                    • Valid keys: lookahead_days (integer), names (romanian | canonical)\n\
                    • Point SINAXAR_CONFIG at the file you want to use",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SinaxarError
pub type Result<T> = std::result::Result<T, SinaxarError>;
