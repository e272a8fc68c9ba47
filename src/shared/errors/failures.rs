use serde::Serialize;
use thiserror::Error;

/// Why a network call did not produce a usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum NetworkFailure {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid response: {0}")]
    Decode(String),

    /// A 2xx response whose body carries an error status (e.g. `REQUEST_DENIED`).
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<reqwest::Error> for NetworkFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkFailure::Timeout
        } else if let Some(status) = err.status() {
            NetworkFailure::Status(status.as_u16())
        } else if err.is_decode() {
            NetworkFailure::Decode(err.to_string())
        } else if err.is_connect() {
            NetworkFailure::Transport("failed to connect to backend".to_string())
        } else {
            NetworkFailure::Transport(err.to_string())
        }
    }
}

/// Why a location hint could not be turned into coordinates.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum GeocodeFailure {
    #[error("location not found")]
    NotFound,

    #[error("device location unavailable: {0}")]
    LocationDenied(String),
}
