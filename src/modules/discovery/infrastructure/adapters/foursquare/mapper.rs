use super::models::Place;
use crate::modules::{
    discovery::domain::{
        entities::PlaceResult,
        services::{field_rules::non_blank, resolve_address},
    },
    location::Coordinate,
};

/// Foursquare rates out of 10; results use the 0-5 scale
const RATING_SCALE: f64 = 2.0;

/// Foursquare specific mapper
#[derive(Debug, Clone, Default)]
pub struct FoursquareMapper;

impl FoursquareMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_to_place_result(&self, place: Place) -> PlaceResult {
        let (short_form, full) = place
            .location
            .map(|location| (location.address, location.formatted_address))
            .unwrap_or_default();

        PlaceResult {
            address: resolve_address(short_form.as_deref(), full.as_deref()),
            rating: place.rating.map(|rating| rating / RATING_SCALE),
            place_id: non_blank(place.fsq_id),
            coordinate: place
                .geocodes
                .and_then(|geocodes| geocodes.main)
                .map(|main| Coordinate::new(main.latitude, main.longitude)),
            name: place.name,
        }
    }
}
