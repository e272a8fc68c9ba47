use async_trait::async_trait;
use std::time::Duration;

use super::models::{Place, PlaceSearchResponse, PLAYGROUND_CATEGORY_ID};
use crate::{
    modules::{
        discovery::{
            domain::{Category, SearchOutcome, SearchQuery},
            infrastructure::adapters::{nearby_search::decode_items, NearbySearch, RawRecord},
        },
        location::ResolvedLocation,
    },
    shared::{config::AppConfig, errors::AppResult, http_client::RateLimitClient},
};

const PLACES_SEARCH_URL: &str = "https://api.foursquare.com/v3/places/search";
const PROVIDER: &str = "Foursquare";

/// Foursquare Places API v3 adapter
pub struct FoursquareAdapter {
    http_client: RateLimitClient,
    api_key: String,
}

impl FoursquareAdapter {
    pub fn new(api_key: String, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: RateLimitClient::for_foursquare(timeout)?,
            api_key,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            config.require_foursquare_key()?.to_string(),
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
                "ll",
                format!("{},{}", location.latitude(), location.longitude()),
            ),
            ("radius", query.radius_meters.to_string()),
            ("limit", query.limit.to_string()),
        ];
        match query.category {
            Category::Playground => params.push(("categories", PLAYGROUND_CATEGORY_ID.to_string())),
            Category::Event => params.push(("query", query.category.keyword().to_string())),
        }
        params
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        // v3 takes the bare key, no "Bearer" prefix
        vec![("Authorization", self.api_key.clone())]
    }

    pub(crate) fn interpret(response: PlaceSearchResponse, limit: u32) -> SearchOutcome<RawRecord> {
        let places: Vec<Place> = decode_items(PROVIDER, response.results);
        SearchOutcome::from_items(
            places
                .into_iter()
                .take(limit as usize)
                .map(RawRecord::FoursquarePlace)
                .collect(),
        )
    }
}

#[async_trait]
impl NearbySearch for FoursquareAdapter {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(
        &self,
        location: &ResolvedLocation,
        query: &SearchQuery,
    ) -> SearchOutcome<RawRecord> {
        log::info!(
            "Foursquare: Searching {} within {}m of {} (limit: {})",
            query.category.plural(),
            query.radius_meters,
            location.coordinate(),
            query.limit
        );

        let response: PlaceSearchResponse = match self
            .http_client
            .get_json(
                PLACES_SEARCH_URL,
                &self.build_query(location, query),
                &self.auth_headers(),
            )
            .await
        {
            Ok(response) => response,
            Err(failure) => return SearchOutcome::NetworkFailure(failure),
        };

        let outcome = Self::interpret(response, query.limit);
        log::info!(
            "Foursquare: {} ({} records)",
            outcome.label(),
            outcome.items().len()
        );
        outcome
    }
}
