use serde::Serialize;

use super::format::{directions_url, rating_label};
use crate::modules::{
    discovery::{EventResult, PlaceResult},
    location::Coordinate,
};

/// Styling of the status region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// Content a marker shows when clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerPopup {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}

impl MarkerPopup {
    pub fn for_place(place: &PlaceResult) -> Self {
        Self {
            title: place.name.clone(),
            body: format!("{}\nRating: {}", place.address, rating_label(place.rating)),
            link: Some(directions_url(&place.name, place.place_id.as_deref())),
        }
    }
}

/// UI surface the search pipeline writes to.
///
/// The sink owns the cards container, the map and its markers. Only the
/// orchestrator calls these methods, and only for the latest cycle.
/// `clear` removes cards, markers and the status message; the map center
/// is kept.
pub trait PresentationSink: Send {
    fn clear(&mut self);

    fn render_place(&mut self, place: &PlaceResult);

    fn render_event(&mut self, event: &EventResult);

    fn set_map_center(&mut self, center: Coordinate);

    fn add_marker(&mut self, position: Coordinate, label: &str, popup: MarkerPopup);

    fn show_message(&mut self, message: StatusMessage);
}
