use serde::{Deserialize, Serialize};

use super::{EventResult, PlaceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResult {
    Place(PlaceResult),
    Event(EventResult),
}

impl SearchResult {
    /// Card heading
    pub fn title(&self) -> &str {
        match self {
            SearchResult::Place(place) => &place.name,
            SearchResult::Event(event) => &event.title,
        }
    }

    pub fn as_place(&self) -> Option<&PlaceResult> {
        match self {
            SearchResult::Place(place) => Some(place),
            SearchResult::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&EventResult> {
        match self {
            SearchResult::Event(event) => Some(event),
            SearchResult::Place(_) => None,
        }
    }
}

impl From<PlaceResult> for SearchResult {
    fn from(place: PlaceResult) -> Self {
        SearchResult::Place(place)
    }
}

impl From<EventResult> for SearchResult {
    fn from(event: EventResult) -> Self {
        SearchResult::Event(event)
    }
}
