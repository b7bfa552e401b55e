pub mod args;
pub mod auth;
pub mod endpoints;
pub mod error;
pub mod response;

pub use args::{DEFAULT_LIST_LIMIT, ListTracesArgs, TraceDetailArgs};
pub use auth::{AuthRequest, AuthResponse, Credential, SessionToken};
pub use endpoints::DEFAULT_API_URL;
pub use error::{Error, Result};
pub use response::RawResponse;
