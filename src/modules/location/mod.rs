pub mod domain;
pub mod infrastructure;

pub use domain::{
    resolve_hint, Coordinate, DeviceLocator, Geocoder, LocationHint, PostalCode,
    ResolvedLocation,
};
pub use infrastructure::{
    device_locator_from_config, GoogleGeocoder, StaticDeviceLocator, UnavailableDeviceLocator,
};
