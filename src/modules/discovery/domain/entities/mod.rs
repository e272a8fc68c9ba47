pub mod event_result;
pub mod place_result;
pub mod search_result;

pub use event_result::EventResult;
pub use place_result::PlaceResult;
pub use search_result::SearchResult;
