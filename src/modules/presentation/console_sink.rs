use std::io::Write;

use super::format::{event_start_label, rating_label, venue_label};
use super::sink::{MarkerPopup, MessageKind, PresentationSink, StatusMessage};
use crate::modules::{
    discovery::{EventResult, PlaceResult},
    location::Coordinate,
};

/// Plain-text sink for terminals and logs.
///
/// A terminal cannot take output back, so `clear` prints a separator
/// instead of erasing.
pub struct ConsoleSink<W: Write + Send> {
    out: W,
    has_output: bool,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            has_output: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(e) = writeln!(self.out, "{}", line) {
                log::warn!("Console sink: write failed: {}", e);
                return;
            }
        }
        self.has_output = true;
        if let Err(e) = self.out.flush() {
            log::warn!("Console sink: flush failed: {}", e);
        }
    }
}

impl<W: Write + Send> PresentationSink for ConsoleSink<W> {
    fn clear(&mut self) {
        if self.has_output {
            self.write_lines(&["----".to_string()]);
            self.has_output = false;
        }
    }

    fn render_place(&mut self, place: &PlaceResult) {
        self.write_lines(&[
            place.name.clone(),
            format!("  Address: {}", place.address),
            format!("  Rating: {}", rating_label(place.rating)),
        ]);
    }

    fn render_event(&mut self, event: &EventResult) {
        let mut lines = vec![
            event.title.clone(),
            format!("  Date: {}", event_start_label(&event.start_time)),
            format!("  Venue: {}", venue_label(event.venue_name.as_deref())),
            format!("  {}", event.description),
            format!("  More info: {}", event.url),
        ];
        if let Some(image_url) = &event.image_url {
            lines.push(format!("  Image: {}", image_url));
        }
        self.write_lines(&lines);
    }

    fn set_map_center(&mut self, center: Coordinate) {
        self.write_lines(&[format!("Map centered at {}", center)]);
    }

    fn add_marker(&mut self, position: Coordinate, label: &str, popup: MarkerPopup) {
        let mut line = format!("  Marker: {} at {}", label, position);
        if let Some(link) = popup.link {
            line.push_str(&format!(" ({})", link));
        }
        self.write_lines(&[line]);
    }

    fn show_message(&mut self, message: StatusMessage) {
        let prefix = match message.kind {
            MessageKind::Info => "info",
            MessageKind::Error => "error",
        };
        self.write_lines(&[format!("[{}] {}", prefix, message.text)]);
    }
}
