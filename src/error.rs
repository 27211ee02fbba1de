use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No connection with server: {0}")]
    NoConnection(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Transport status the failure maps to. `0` means no response was received at all.
    /// Errors that never touched the network have no status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::NoConnection(_) => Some(0),
            ClientError::Http { status, .. } => Some(status.as_u16()),
            ClientError::Decode(_) | ClientError::Validation(_) | ClientError::Config(_) => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
