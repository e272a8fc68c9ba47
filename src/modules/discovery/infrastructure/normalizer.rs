//! Turns backend records into the common result shape.
//!
//! Normalization is total: every record that decoded produces a result,
//! with documented defaults standing in for missing fields.

use super::adapters::{
    eventbrite::mapper::EventbriteMapper, foursquare::mapper::FoursquareMapper,
    google_places::mapper::GooglePlacesMapper, RawRecord,
};
use crate::modules::discovery::domain::SearchResult;

pub fn normalize(record: RawRecord) -> SearchResult {
    match record {
        RawRecord::GooglePlace(place) => {
            GooglePlacesMapper::new().map_to_place_result(place).into()
        }
        RawRecord::FoursquarePlace(place) => {
            FoursquareMapper::new().map_to_place_result(place).into()
        }
        RawRecord::EventbriteEvent(event) => {
            EventbriteMapper::new().map_to_event_result(event).into()
        }
    }
}

/// Order is preserved
pub fn normalize_all(records: Vec<RawRecord>) -> Vec<SearchResult> {
    records.into_iter().map(normalize).collect()
}
