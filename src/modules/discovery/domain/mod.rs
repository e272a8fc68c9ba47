pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{EventResult, PlaceResult, SearchResult};
pub use services::{RatingPolicy, MIN_RATING};
pub use value_objects::{Category, SearchOutcome, SearchQuery};
