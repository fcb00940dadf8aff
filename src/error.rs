use thiserror::Error;

/// Unified error type for bumper operations
#[derive(Error, Debug)]
pub enum BumperError {
    #[error("Invalid version format: '{0}' is not a valid SemVer string")]
    InvalidFormat(String),

    #[error("Invalid replace rule: {0}")]
    InvalidRule(String),

    #[error("The file doesn't exist: {0}")]
    FileNotFound(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("Can't read the file '{file}': {source}")]
    ReadFailure {
        file: String,
        source: std::io::Error,
    },

    #[error("Can't write to the file '{file}': {source}")]
    WriteFailure {
        file: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("VCS operation failed: {0}")]
    Vcs(String),
}

/// Convenience type alias for Results in bumper
pub type Result<T> = std::result::Result<T, BumperError>;

impl BumperError {
    /// Create an invalid-format error carrying the rejected version string
    pub fn invalid_format(input: impl Into<String>) -> Self {
        BumperError::InvalidFormat(input.into())
    }

    /// Create an invalid-rule error with context
    pub fn invalid_rule(msg: impl Into<String>) -> Self {
        BumperError::InvalidRule(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumperError::Config(msg.into())
    }

    /// Create a VCS error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        BumperError::Vcs(msg.into())
    }
}
