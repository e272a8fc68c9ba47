// Shared kernel: cross-cutting pieces used by every module

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod http_client; // Rate limited HTTP client shared by the backends
pub mod utils; // Logging and input validation

pub use config::{AppConfig, PlacesProvider};
pub use errors::{AppError, AppResult, GeocodeFailure, NetworkFailure};
