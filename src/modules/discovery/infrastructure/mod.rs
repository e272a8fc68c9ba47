pub mod adapters;
pub mod backends;
pub mod normalizer;

pub use adapters::{
    EventbriteAdapter, FoursquareAdapter, GooglePlacesAdapter, NearbySearch, RawRecord,
};
pub use backends::SearchBackends;
pub use normalizer::{normalize, normalize_all};
