use serde::{Deserialize, Serialize};

use crate::modules::location::Coordinate;

/// A place normalized from any places backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    /// Always filled; falls back to "Address not available"
    pub address: String,
    /// 0-5 scale
    pub rating: Option<f64>,
    pub place_id: Option<String>,
    pub coordinate: Option<Coordinate>,
}

impl PlaceResult {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            rating: None,
            place_id: None,
            coordinate: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }
}
