use super::{eventbrite, foursquare, google_places};

/// A record exactly as one backend shaped it
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    GooglePlace(google_places::models::Place),
    FoursquarePlace(foursquare::models::Place),
    EventbriteEvent(eventbrite::models::Event),
}

impl RawRecord {
    pub fn provider(&self) -> &'static str {
        match self {
            RawRecord::GooglePlace(_) => "Google Places",
            RawRecord::FoursquarePlace(_) => "Foursquare",
            RawRecord::EventbriteEvent(_) => "Eventbrite",
        }
    }
}
