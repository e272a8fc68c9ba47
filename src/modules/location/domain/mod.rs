pub mod repositories;
pub mod value_objects;

pub use repositories::{resolve_hint, DeviceLocator, Geocoder};
pub use value_objects::{Coordinate, LocationHint, PostalCode, ResolvedLocation};
