use super::sink::{MarkerPopup, PresentationSink, StatusMessage};
use crate::modules::{
    discovery::{EventResult, PlaceResult},
    location::Coordinate,
};

/// One call made on a sink, in order
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Clear,
    RenderPlace(PlaceResult),
    RenderEvent(EventResult),
    SetMapCenter(Coordinate),
    AddMarker(RecordedMarker),
    ShowMessage(StatusMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMarker {
    pub position: Coordinate,
    pub label: String,
    pub popup: MarkerPopup,
}

/// In-memory sink that keeps both the call log and what is currently shown
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    places: Vec<PlaceResult>,
    events: Vec<EventResult>,
    markers: Vec<RecordedMarker>,
    message: Option<StatusMessage>,
    center: Option<Coordinate>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    pub fn places(&self) -> &[PlaceResult] {
        &self.places
    }

    pub fn events(&self) -> &[EventResult] {
        &self.events
    }

    /// Cards currently shown, places and events together
    pub fn card_count(&self) -> usize {
        self.places.len() + self.events.len()
    }

    pub fn markers(&self) -> &[RecordedMarker] {
        &self.markers
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn center(&self) -> Option<Coordinate> {
        self.center
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SinkCall::Clear))
            .count()
    }

    /// Calls made since the last `clear`, excluding it
    pub fn calls_since_clear(&self) -> &[SinkCall] {
        match self.calls.iter().rposition(|call| matches!(call, SinkCall::Clear)) {
            Some(index) => &self.calls[index + 1..],
            None => &self.calls,
        }
    }
}

impl PresentationSink for RecordingSink {
    fn clear(&mut self) {
        self.calls.push(SinkCall::Clear);
        self.places.clear();
        self.events.clear();
        self.markers.clear();
        self.message = None;
    }

    fn render_place(&mut self, place: &PlaceResult) {
        self.calls.push(SinkCall::RenderPlace(place.clone()));
        self.places.push(place.clone());
    }

    fn render_event(&mut self, event: &EventResult) {
        self.calls.push(SinkCall::RenderEvent(event.clone()));
        self.events.push(event.clone());
    }

    fn set_map_center(&mut self, center: Coordinate) {
        self.calls.push(SinkCall::SetMapCenter(center));
        self.center = Some(center);
    }

    fn add_marker(&mut self, position: Coordinate, label: &str, popup: MarkerPopup) {
        let marker = RecordedMarker {
            position,
            label: label.to_string(),
            popup,
        };
        self.calls.push(SinkCall::AddMarker(marker.clone()));
        self.markers.push(marker);
    }

    fn show_message(&mut self, message: StatusMessage) {
        self.calls.push(SinkCall::ShowMessage(message.clone()));
        self.message = Some(message);
    }
}
