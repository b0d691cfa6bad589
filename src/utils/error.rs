use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Not authenticated. Run `beetimer auth <username>` first")]
    ConfigMissingCredentials,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Goal {0} already started")]
    AlreadyStarted(String),

    #[error("Goal {0} already stopped")]
    AlreadyStopped(String),

    #[error("Goal {0} not started")]
    NotStarted(String),

    #[error("Goal {0} not found")]
    GoalNotFound(String),

    #[error("No time format for {0}. Pass --time-format or set one with `beetimer config time:<format>`")]
    MissingFormat(String),

    #[error("API request failed with code {status}: {body}")]
    RemoteRequestFailed { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::RemoteRequestFailed { .. } | AppError::Network(_) => {
            eprintln!("🌐 {}", OutputStyle::error(&err.to_string()));
        }
        AppError::AlreadyStarted(_)
        | AppError::AlreadyStopped(_)
        | AppError::NotStarted(_)
        | AppError::GoalNotFound(_) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&err.to_string()));
        }
        _ => {
            eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
        }
    }
}
