use reqwest::StatusCode;
use thiserror::Error;

/// Authentication failures, split by cause. The three variants are never
/// collapsed: callers present connectivity problems differently from
/// credential rejections.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The server answered with an error payload (wrong password,
    /// duplicate account, and so on)
    #[error("{0}")]
    ServerRejected(String),

    /// The request went out but no response came back
    #[error("No response from server. Please check if the backend is running.")]
    Unreachable,

    /// The request could not be built, or a successful response could
    /// not be decoded into a user record
    #[error("Request failed: {0}")]
    RequestSetup(#[source] reqwest::Error),
}

impl AuthError {
    /// Wrap a non-success response, preferring the server's own message
    pub fn from_rejection(status: StatusCode, body: String) -> Self {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            body
        };
        AuthError::ServerRejected(message)
    }

    /// Classify a transport-level reqwest error
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AuthError::Unreachable
        } else {
            AuthError::RequestSetup(err)
        }
    }
}
