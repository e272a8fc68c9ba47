pub mod app_error;
pub mod failures;

pub use app_error::{AppError, AppResult};
pub use failures::{GeocodeFailure, NetworkFailure};
