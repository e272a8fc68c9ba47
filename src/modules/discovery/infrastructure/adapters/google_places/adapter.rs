use async_trait::async_trait;
use std::time::Duration;

use super::models::{status, NearbySearchResponse, Place};
use crate::{
    modules::{
        discovery::{
            domain::{Category, SearchOutcome, SearchQuery},
            infrastructure::adapters::{nearby_search::decode_items, NearbySearch, RawRecord},
        },
        location::ResolvedLocation,
    },
    shared::{
        config::AppConfig,
        errors::{AppResult, NetworkFailure},
        http_client::RateLimitClient,
    },
};

const NEARBY_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const PROVIDER: &str = "Google Places";
/// Nearby Search rejects larger radii
const MAX_RADIUS_METERS: u32 = 50_000;

/// Google Places Nearby Search adapter
pub struct GooglePlacesAdapter {
    http_client: RateLimitClient,
    api_key: String,
}

impl GooglePlacesAdapter {
    pub fn new(api_key: String, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: RateLimitClient::for_google(timeout)?,
            api_key,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            config.require_google_key()?.to_string(),
            config.request_timeout,
        )
    }

    fn build_query(
        &self,
        location: &ResolvedLocation,
        query: &SearchQuery,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (
                "location",
                format!("{},{}", location.latitude(), location.longitude()),
            ),
            ("radius", query.radius_meters.min(MAX_RADIUS_METERS).to_string()),
            ("keyword", query.category.keyword().to_string()),
        ];
        if query.category == Category::Playground {
            params.push(("type", "park".to_string()));
        }
        params.push(("key", self.api_key.clone()));
        params
    }

    pub(crate) fn interpret(
        response: NearbySearchResponse,
        limit: u32,
    ) -> SearchOutcome<RawRecord> {
        match response.status.as_str() {
            status::OK => {
                let places: Vec<Place> = decode_items(PROVIDER, response.results);
                SearchOutcome::from_items(
                    places
                        .into_iter()
                        .take(limit as usize)
                        .map(RawRecord::GooglePlace)
                        .collect(),
                )
            }
            status::ZERO_RESULTS => SearchOutcome::EmptyResult,
            other => {
                let detail = match response.error_message {
                    Some(message) => format!("{}: {}", other, message),
                    None => other.to_string(),
                };
                SearchOutcome::NetworkFailure(NetworkFailure::Backend(detail))
            }
        }
    }
}

#[async_trait]
impl NearbySearch for GooglePlacesAdapter {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(
        &self,
        location: &ResolvedLocation,
        query: &SearchQuery,
    ) -> SearchOutcome<RawRecord> {
        log::info!(
            "Google Places: Searching {} within {}m of {}",
            query.category.plural(),
            query.radius_meters,
            location.coordinate()
        );

        let response: NearbySearchResponse = match self
            .http_client
            .get_json(NEARBY_SEARCH_URL, &self.build_query(location, query), &[])
            .await
        {
            Ok(response) => response,
            Err(failure) => return SearchOutcome::NetworkFailure(failure),
        };

        let outcome = Self::interpret(response, query.limit);
        log::info!(
            "Google Places: {} ({} records)",
            outcome.label(),
            outcome.items().len()
        );
        outcome
    }
}
