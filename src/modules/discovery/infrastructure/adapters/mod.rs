pub mod eventbrite;
pub mod foursquare;
pub mod google_places;
pub mod nearby_search;
pub mod raw_record;

pub use eventbrite::EventbriteAdapter;
pub use foursquare::FoursquareAdapter;
pub use google_places::GooglePlacesAdapter;
pub use nearby_search::NearbySearch;
pub use raw_record::RawRecord;
