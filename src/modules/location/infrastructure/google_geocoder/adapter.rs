use async_trait::async_trait;
use std::time::Duration;

use super::models::{status, GeocodeResponse};
use crate::{
    modules::location::domain::{Coordinate, Geocoder, PostalCode, ResolvedLocation},
    shared::{
        config::AppConfig,
        errors::{AppError, AppResult, GeocodeFailure, NetworkFailure},
        http_client::RateLimitClient,
    },
};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Google Geocoding API adapter
pub struct GoogleGeocoder {
    http_client: RateLimitClient,
    api_key: String,
    /// ISO country code passed as a `components` restriction
    country: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(api_key: String, country: Option<String>, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: RateLimitClient::for_google(timeout)?,
            api_key,
            country,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            config.require_google_key()?.to_string(),
            config.country.clone(),
            config.request_timeout,
        )
    }

    fn build_query(&self, postal_code: &PostalCode) -> Vec<(&'static str, String)> {
        let mut query = vec![("address", postal_code.to_string())];
        if let Some(country) = &self.country {
            query.push(("components", format!("country:{}", country)));
        }
        query.push(("key", self.api_key.clone()));
        query
    }

    /// Map a decoded response to the geocoding contract. The first candidate wins.
    pub(crate) fn interpret(response: GeocodeResponse) -> AppResult<ResolvedLocation> {
        match response.status.as_str() {
            status::OK => response
                .results
                .into_iter()
                .next()
                .map(|first| {
                    let location = first.geometry.location;
                    ResolvedLocation::new(Coordinate::new(location.lat, location.lng))
                })
                .ok_or(AppError::GeocodeFailure(GeocodeFailure::NotFound)),
            status::ZERO_RESULTS => Err(AppError::GeocodeFailure(GeocodeFailure::NotFound)),
            other => {
                let detail = match response.error_message {
                    Some(message) => format!("{}: {}", other, message),
                    None => other.to_string(),
                };
                Err(AppError::NetworkFailure(NetworkFailure::Backend(detail)))
            }
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    fn name(&self) -> &'static str {
        "Google Geocoding"
    }

    async fn geocode(&self, postal_code: &PostalCode) -> AppResult<ResolvedLocation> {
        log::info!("Google: Geocoding '{}'", postal_code);

        let response: GeocodeResponse = self
            .http_client
            .get_json(GEOCODE_URL, &self.build_query(postal_code), &[])
            .await?;

        let candidates = response.results.len();
        let resolved = Self::interpret(response)?;

        if candidates > 1 {
            log::debug!(
                "Google: '{}' matched {} candidates, using the first",
                postal_code,
                candidates
            );
        }
        log::info!(
            "Google: '{}' resolved to {}",
            postal_code,
            resolved.coordinate()
        );
        Ok(resolved)
    }
}
