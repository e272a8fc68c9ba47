pub mod device_locator;
pub mod google_geocoder;

pub use device_locator::{device_locator_from_config, StaticDeviceLocator, UnavailableDeviceLocator};
pub use google_geocoder::GoogleGeocoder;
