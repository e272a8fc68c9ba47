use async_trait::async_trait;
use std::time::Duration;

use super::models::{Event, EventSearchResponse};
use crate::{
    modules::{
        discovery::{
            domain::{SearchOutcome, SearchQuery},
            infrastructure::adapters::{nearby_search::decode_items, NearbySearch, RawRecord},
        },
        location::ResolvedLocation,
    },
    shared::{config::AppConfig, errors::AppResult, http_client::RateLimitClient},
};

const EVENT_SEARCH_URL: &str = "https://www.eventbriteapi.com/v3/events/search/";
const PROVIDER: &str = "Eventbrite";

/// Eventbrite event search adapter
pub struct EventbriteAdapter {
    http_client: RateLimitClient,
    token: String,
}

impl EventbriteAdapter {
    pub fn new(token: String, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: RateLimitClient::for_eventbrite(timeout)?,
            token,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            config.require_eventbrite_token()?.to_string(),
            config.request_timeout,
        )
    }

    fn build_query(
        &self,
        location: &ResolvedLocation,
        query: &SearchQuery,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("location.latitude", location.latitude().to_string()),
            ("location.longitude", location.longitude().to_string()),
            ("location.within", format!("{}mi", query.radius_miles())),
            ("expand", "venue".to_string()),
        ]
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {}", self.token))]
    }

    pub(crate) fn interpret(response: EventSearchResponse, limit: u32) -> SearchOutcome<RawRecord> {
        let events: Vec<Event> = decode_items(PROVIDER, response.events);
        SearchOutcome::from_items(
            events
                .into_iter()
                .take(limit as usize)
                .map(RawRecord::EventbriteEvent)
                .collect(),
        )
    }
}

#[async_trait]
impl NearbySearch for EventbriteAdapter {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(
        &self,
        location: &ResolvedLocation,
        query: &SearchQuery,
    ) -> SearchOutcome<RawRecord> {
        log::info!(
            "Eventbrite: Searching events within {}mi of {}",
            query.radius_miles(),
            location.coordinate()
        );

        let response: EventSearchResponse = match self
            .http_client
            .get_json(
                EVENT_SEARCH_URL,
                &self.build_query(location, query),
                &self.auth_headers(),
            )
            .await
        {
            Ok(response) => response,
            Err(failure) => return SearchOutcome::NetworkFailure(failure),
        };

        if let Some(count) = response.pagination.as_ref().and_then(|p| p.object_count) {
            log::debug!("Eventbrite: {} events available in total", count);
        }

        let outcome = Self::interpret(response, query.limit);
        log::info!(
            "Eventbrite: {} ({} records)",
            outcome.label(),
            outcome.items().len()
        );
        outcome
    }
}
