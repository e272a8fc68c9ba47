//! Render-time formatting. Normalized records keep raw values; labels such
//! as "N/A" only exist here.

use chrono::NaiveDateTime;

pub const RATING_NOT_AVAILABLE: &str = "N/A";
pub const VENUE_NOT_SPECIFIED: &str = "Venue not specified";

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1";

/// One decimal, or "N/A" for a missing or zero rating
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(rating) if rating > 0.0 => format!("{:.1}", rating),
        _ => RATING_NOT_AVAILABLE.to_string(),
    }
}

pub fn directions_url(name: &str, place_id: Option<&str>) -> String {
    let mut url = format!("{}&query={}", MAPS_SEARCH_URL, urlencoding::encode(name));
    if let Some(place_id) = place_id {
        url.push_str("&query_place_id=");
        url.push_str(&urlencoding::encode(place_id));
    }
    url
}

/// e.g. "May 1, 2024, 7:00 PM"
pub fn event_start_label(start: &NaiveDateTime) -> String {
    start.format("%b %-d, %Y, %-I:%M %p").to_string()
}

pub fn venue_label(venue_name: Option<&str>) -> &str {
    venue_name.unwrap_or(VENUE_NOT_SPECIFIED)
}
