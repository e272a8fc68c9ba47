use async_trait::async_trait;

use super::value_objects::{Coordinate, LocationHint, PostalCode, ResolvedLocation};
use crate::shared::errors::AppResult;

/// Geocoding backend contract
///
/// Implementations issue exactly one request per call. A "not found" answer
/// (or an empty candidate list) is `AppError::GeocodeFailure(NotFound)`; when
/// several candidates come back the first one is used.
#[async_trait]
pub trait Geocoder: Send + Sync {
    fn name(&self) -> &'static str;

    async fn geocode(&self, postal_code: &PostalCode) -> AppResult<ResolvedLocation>;
}

/// One-shot device position lookup (browser geolocation, GPS, fixed config...)
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    /// Fails with `GeocodeFailure::LocationDenied` when the position is unavailable
    async fn current_position(&self) -> AppResult<Coordinate>;
}

/// Turn a hint into coordinates. Coordinate hints never reach the backend.
pub async fn resolve_hint(
    geocoder: &dyn Geocoder,
    hint: &LocationHint,
) -> AppResult<ResolvedLocation> {
    match hint {
        LocationHint::Coordinates(coordinate) => Ok(ResolvedLocation::new(*coordinate)),
        LocationHint::PostalCode(postal_code) => {
            log::debug!("{}: geocoding {}", geocoder.name(), postal_code);
            geocoder.geocode(postal_code).await
        }
    }
}
