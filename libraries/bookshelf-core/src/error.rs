/// Core error types for Bookshelf
use thiserror::Error;

/// Result type alias using `BookshelfError`
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Core error type for Bookshelf
#[derive(Error, Debug)]
pub enum BookshelfError {
    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Backend is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Backend answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to parse a backend response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Name does not match any book form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A form field holds text that is not a valid value for its type
    #[error("Invalid value {value:?} for field {field}")]
    InvalidField { field: String, value: String },
}

impl BookshelfError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status carried by the error, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
