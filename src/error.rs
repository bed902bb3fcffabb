/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors surfaced by the client
///
/// HTTP and JSON failures are passed through to the caller without any
/// recovery; the only classification applied is mapping well-known status
/// codes to dedicated variants.
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// Response body could not be decoded as JSON or into the target type
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// API key rejected by the server (401/403)
    Unauthorized,
    /// Endpoint or resource not found (404)
    NotFound,
    /// Server-side rate limit hit (429)
    RateLimitExceeded,
    /// The server answered with `"status": "error"` or a non-success status
    Api {
        /// HTTP status code of the response
        status: StatusCode,
        /// Message reported by the server, or the raw body
        message: String,
    },
    /// Non-success status without a usable body
    Unexpected(StatusCode),
    /// Caller supplied parameters the client refuses to send or compute with
    InvalidInput(String),
    /// A value could not be serialized into a request payload
    SerializationError(String),
    /// A response payload did not have the expected shape
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Api { status, message } => write!(f, "api error ({status}): {message}"),
            AppError::Unexpected(status) => write!(f, "unexpected http status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;
