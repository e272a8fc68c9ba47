use serde::{Deserialize, Serialize};

/// Places API v3 search envelope. Items are decoded one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub fsq_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub geocodes: Option<Geocodes>,
    /// 0-10 scale; only present with premium fields
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub distance: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Street line, the short form
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geocodes {
    #[serde(default)]
    pub main: Option<LatLong>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

/// Foursquare taxonomy id for "Playground"
pub const PLAYGROUND_CATEGORY_ID: &str = "16032";
