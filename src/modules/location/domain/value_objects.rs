use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Range-checked constructor for coordinates coming from user input
    pub fn try_new(latitude: f64, longitude: f64) -> AppResult<Self> {
        Validator::validate_coordinate(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// Parses `"LAT,LON"`
impl FromStr for Coordinate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::ValidationError(format!("Invalid coordinates '{}'", s));

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Self::try_new(latitude, longitude)
    }
}

/// A US ZIP code that passed the entry guard
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(input: &str) -> AppResult<Self> {
        Validator::validate_postal_code(input).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the user (or device) told us about where to search
#[derive(Debug, Clone, PartialEq)]
pub enum LocationHint {
    PostalCode(PostalCode),
    Coordinates(Coordinate),
}

impl LocationHint {
    pub fn postal_code(input: &str) -> AppResult<Self> {
        PostalCode::parse(input).map(Self::PostalCode)
    }

    pub fn requires_geocoding(&self) -> bool {
        matches!(self, Self::PostalCode(_))
    }
}

/// Coordinates produced for exactly one search cycle.
///
/// Not `Copy`: each cycle resolves its own hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    coordinate: Coordinate,
}

impl ResolvedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }
}
