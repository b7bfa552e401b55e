use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The key exchange failed: credential rejected, service unreachable,
    /// or an auth response without a usable token.
    Auth(String),

    /// A data call failed at the network level or returned a non-2xx status.
    Request {
        status: Option<u16>,
        message: String,
    },

    /// The requested trace does not exist.
    NotFound(String),

    /// Input rejected before any network call was attempted.
    Validation(agentops_types::Error),

    /// Unusable local configuration (config file, HTTP client setup).
    Config(String),
}

impl Error {
    pub fn request(status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Request {
            status,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Request {
                status: Some(status),
                message,
            } => write!(f, "Request failed (HTTP {}): {}", status, message),
            Error::Request {
                status: None,
                message,
            } => write!(f, "Request failed: {}", message),
            Error::NotFound(trace_id) => write!(f, "Trace not found: {}", trace_id),
            Error::Validation(err) => write!(f, "{}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<agentops_types::Error> for Error {
    fn from(err: agentops_types::Error) -> Self {
        Error::Validation(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
