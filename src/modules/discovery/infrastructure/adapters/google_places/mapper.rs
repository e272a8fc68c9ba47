use super::models::Place;
use crate::modules::{
    discovery::domain::{
        entities::PlaceResult,
        services::{field_rules::non_blank, resolve_address},
    },
    location::Coordinate,
};

/// Google Places specific mapper
#[derive(Debug, Clone, Default)]
pub struct GooglePlacesMapper;

impl GooglePlacesMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_to_place_result(&self, place: Place) -> PlaceResult {
        PlaceResult {
            address: resolve_address(place.vicinity.as_deref(), place.formatted_address.as_deref()),
            rating: place.rating,
            place_id: non_blank(place.place_id),
            coordinate: place
                .geometry
                .map(|geometry| Coordinate::new(geometry.location.lat, geometry.location.lng)),
            name: place.name,
        }
    }
}
