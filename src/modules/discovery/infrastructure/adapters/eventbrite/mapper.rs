use super::models::Event;
use crate::modules::discovery::domain::{
    entities::EventResult,
    services::{field_rules::non_blank, truncate_description, UNTITLED_EVENT},
};

/// Eventbrite specific mapper
#[derive(Debug, Clone, Default)]
pub struct EventbriteMapper;

impl EventbriteMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_to_event_result(&self, event: Event) -> EventResult {
        let description = event.description.and_then(|d| d.text);

        EventResult {
            title: non_blank(event.name.and_then(|name| name.text))
                .unwrap_or_else(|| UNTITLED_EVENT.to_string()),
            url: event.url,
            start_time: event.start.local,
            venue_name: non_blank(event.venue.and_then(|venue| venue.name)),
            image_url: non_blank(event.logo.and_then(|logo| logo.url)),
            description: truncate_description(description.as_deref()),
        }
    }
}
