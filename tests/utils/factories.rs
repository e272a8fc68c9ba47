/// Backend record factories using builder pattern
///
/// Records are built from JSON so they go through the same decoding as live
/// backend responses.
use playfinder_lib::modules::discovery::RawRecord;
use serde_json::{json, Value};

pub struct GooglePlaceFactory {
    name: String,
    vicinity: Option<String>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    place_id: Option<String>,
    location: Option<(f64, f64)>,
}

impl Default for GooglePlaceFactory {
    fn default() -> Self {
        Self {
            name: "Test Park".to_string(),
            vicinity: Some("100 Main St".to_string()),
            formatted_address: None,
            rating: None,
            place_id: None,
            location: Some((40.2338, -111.6585)),
        }
    }
}

impl GooglePlaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_place_id(mut self, place_id: &str) -> Self {
        self.place_id = Some(place_id.to_string());
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some((lat, lng));
        self
    }

    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    pub fn with_formatted_address_only(mut self, address: &str) -> Self {
        self.vicinity = None;
        self.formatted_address = Some(address.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "name": self.name,
            "vicinity": self.vicinity,
            "formatted_address": self.formatted_address,
            "rating": self.rating,
            "place_id": self.place_id,
        });
        if let Some((lat, lng)) = self.location {
            value["geometry"] = json!({"location": {"lat": lat, "lng": lng}});
        }
        value
    }

    pub fn build(self) -> RawRecord {
        RawRecord::GooglePlace(serde_json::from_value(self.to_json()).unwrap())
    }
}

pub struct EventbriteEventFactory {
    title: Option<String>,
    description: Option<String>,
    start_local: String,
    venue_name: Option<String>,
    logo_url: Option<String>,
}

impl Default for EventbriteEventFactory {
    fn default() -> Self {
        Self {
            title: Some("Test Event".to_string()),
            description: Some("A fun afternoon for the whole family.".to_string()),
            start_local: "2024-05-01T19:00:00".to_string(),
            venue_name: Some("Provo City Library".to_string()),
            logo_url: None,
        }
    }
}

impl EventbriteEventFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn sparse() -> Self {
        Self {
            title: None,
            description: None,
            venue_name: None,
            logo_url: None,
            ..Self::default()
        }
    }

    pub fn build(self) -> RawRecord {
        let value = json!({
            "name": self.title.map(|text| json!({"text": text})),
            "description": self.description.map(|text| json!({"text": text})),
            "url": "https://www.eventbrite.com/e/1",
            "start": {"local": self.start_local},
            "venue": self.venue_name.map(|name| json!({"name": name})),
            "logo": self.logo_url.map(|url| json!({"url": url})),
        });
        RawRecord::EventbriteEvent(serde_json::from_value(value).unwrap())
    }
}
