use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        AppError::Parse(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        AppError::Overflow(msg.into())
    }
}

/// Reject zero for arguments that must be at least 1.
pub fn require_positive(value: u64, name: &str) -> AppResult<u64> {
    if value == 0 {
        return Err(AppError::invalid(format!("{} must be >= 1, got 0", name)));
    }
    Ok(value)
}

/// Convert a signed command-line value into a positive index.
pub fn positive(value: i64, name: &str) -> AppResult<u64> {
    if value < 1 {
        return Err(AppError::invalid(format!("{} must be >= 1, got {}", name, value)));
    }
    Ok(value as u64)
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::InvalidArgument(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Invalid argument: {}", msg)));
        }
        AppError::Parse(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Malformed structure: {}", msg)));
        }
        AppError::Overflow(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Overflow: {}", msg)));
        }
        AppError::Config(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}
