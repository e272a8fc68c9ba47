use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event search envelope. Items are decoded one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSearchResponse {
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub object_count: Option<u32>,
    #[serde(default)]
    pub has_more_items: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<MultipartText>,
    #[serde(default)]
    pub description: Option<MultipartText>,
    pub url: String,
    pub start: DateTimeTz,
    #[serde(default)]
    pub logo: Option<Logo>,
    /// Present with `expand=venue`
    #[serde(default)]
    pub venue: Option<Venue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipartText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeTz {
    #[serde(default)]
    pub timezone: Option<String>,
    /// Venue wall-clock time, e.g. `2024-05-01T19:00:00`
    pub local: NaiveDateTime,
    #[serde(default)]
    pub utc: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}
