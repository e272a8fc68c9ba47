/// Orchestrator builders for integration tests
use playfinder_lib::modules::{
    discovery::{NearbySearch, SearchBackends},
    location::{DeviceLocator, Geocoder, UnavailableDeviceLocator},
    presentation::RecordingSink,
    search::{SearchOrchestrator, SearchSettings},
};
use std::sync::Arc;
use std::time::Duration;

pub fn test_settings() -> SearchSettings {
    SearchSettings {
        request_timeout: Duration::from_secs(2),
        ..SearchSettings::default()
    }
}

pub fn build_orchestrator(
    geocoder: Arc<dyn Geocoder>,
    device_locator: Arc<dyn DeviceLocator>,
    backends: SearchBackends,
) -> SearchOrchestrator<RecordingSink> {
    SearchOrchestrator::new(geocoder, device_locator, backends, RecordingSink::new())
        .with_settings(test_settings())
}

/// Playground searches only, no device position
pub fn playground_orchestrator(
    geocoder: impl Geocoder + 'static,
    search: impl NearbySearch + 'static,
) -> SearchOrchestrator<RecordingSink> {
    build_orchestrator(
        Arc::new(geocoder),
        Arc::new(UnavailableDeviceLocator),
        SearchBackends::new(Some(Arc::new(search)), None),
    )
}
