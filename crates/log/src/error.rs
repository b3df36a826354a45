//! Errors raised while installing the logger.

/// Logger setup errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level string is not a valid `EnvFilter` directive.
    #[error("invalid filter `{filter}`: {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;
