pub mod domain;
pub mod infrastructure;

pub use domain::{
    Category, EventResult, PlaceResult, RatingPolicy, SearchOutcome, SearchQuery, SearchResult,
};
pub use infrastructure::{normalize, normalize_all, NearbySearch, RawRecord, SearchBackends};
