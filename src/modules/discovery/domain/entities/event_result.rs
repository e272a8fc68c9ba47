use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An event normalized from an events backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    pub title: String,
    pub url: String,
    /// Wall-clock time at the venue
    pub start_time: NaiveDateTime,
    pub venue_name: Option<String>,
    pub image_url: Option<String>,
    /// At most 150 characters plus "..."
    pub description: String,
}
