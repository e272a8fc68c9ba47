use serde::Serialize;
use thiserror::Error;

use super::failures::{GeocodeFailure, NetworkFailure};

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Rejected before any network activity.
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Geocoding failed: {0}")]
    GeocodeFailure(GeocodeFailure),

    #[error("Network failure: {0}")]
    NetworkFailure(NetworkFailure),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<NetworkFailure> for AppError {
    fn from(failure: NetworkFailure) -> Self {
        AppError::NetworkFailure(failure)
    }
}

impl From<GeocodeFailure> for AppError {
    fn from(failure: GeocodeFailure) -> Self {
        AppError::GeocodeFailure(failure)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkFailure(NetworkFailure::from(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ConfigError(format!("Invalid number: {}", err))
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AppError::ConfigError(format!("Invalid decimal number: {}", err))
    }
}

impl AppError {
    /// True for errors raised by the entry guard, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
