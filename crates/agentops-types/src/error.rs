use std::fmt;

/// Result type for agentops-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Argument validation failures, detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required parameter was absent or empty
    MissingParameter(String),

    /// A parameter was present but unusable
    InvalidParameter { name: String, reason: String },
}

impl Error {
    pub fn missing(name: &str) -> Self {
        Error::MissingParameter(name.to_string())
    }

    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            Error::MissingParameter(name) => name,
            Error::InvalidParameter { name, .. } => name,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingParameter(name) => write!(f, "{} is required", name),
            Error::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
