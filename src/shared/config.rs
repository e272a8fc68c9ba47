//! Environment-driven configuration.
//!
//! Credentials are injected here and handed to the adapters; nothing in the
//! pipeline embeds an API key.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PLAYGROUND_RADIUS_M: u32 = 5_000;
/// Ten miles.
pub const DEFAULT_EVENT_RADIUS_M: u32 = 16_093;
pub const DEFAULT_RESULT_LIMIT: u32 = 10;
pub const DEFAULT_COUNTRY: &str = "US";

/// Which backend answers playground searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacesProvider {
    Google,
    Foursquare,
}

impl FromStr for PlacesProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(PlacesProvider::Google),
            "foursquare" => Ok(PlacesProvider::Foursquare),
            other => Err(AppError::ConfigError(format!(
                "Unknown places provider '{}' (expected google or foursquare)",
                other
            ))),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: Option<String>,
    pub foursquare_api_key: Option<String>,
    pub eventbrite_token: Option<String>,
    pub places_provider: PlacesProvider,
    pub request_timeout: Duration,
    pub playground_radius_m: u32,
    pub event_radius_m: u32,
    pub result_limit: u32,
    /// Country restriction applied to postal code geocoding
    pub country: Option<String>,
    /// Fixed (latitude, longitude) reported as the device position
    pub device_position: Option<(f64, f64)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            foursquare_api_key: None,
            eventbrite_token: None,
            places_provider: PlacesProvider::Google,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            playground_radius_m: DEFAULT_PLAYGROUND_RADIUS_M,
            event_radius_m: DEFAULT_EVENT_RADIUS_M,
            result_limit: DEFAULT_RESULT_LIMIT,
            country: Some(DEFAULT_COUNTRY.to_string()),
            device_position: None,
        }
    }
}

// Keys are redacted so the config can be logged safely
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(key: &Option<String>) -> &'static str {
            if key.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &redact(&self.google_maps_api_key))
            .field("foursquare_api_key", &redact(&self.foursquare_api_key))
            .field("eventbrite_token", &redact(&self.eventbrite_token))
            .field("places_provider", &self.places_provider)
            .field("request_timeout", &self.request_timeout)
            .field("playground_radius_m", &self.playground_radius_m)
            .field("event_radius_m", &self.event_radius_m)
            .field("result_limit", &self.result_limit)
            .field("country", &self.country)
            .field("device_position", &self.device_position)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment (after `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let places_provider = match get("PLAYFINDER_PLACES_PROVIDER") {
            Some(value) => value.parse::<PlacesProvider>()?,
            None => defaults.places_provider,
        };

        let request_timeout = match get("PLAYFINDER_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse()?;
                if secs == 0 {
                    return Err(AppError::ConfigError(
                        "PLAYFINDER_TIMEOUT_SECS must be positive".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let result_limit = parse_or(get("PLAYFINDER_RESULT_LIMIT"), defaults.result_limit)?;
        if result_limit == 0 {
            return Err(AppError::ConfigError(
                "PLAYFINDER_RESULT_LIMIT must be positive".to_string(),
            ));
        }

        let device_position = match (get("PLAYFINDER_DEVICE_LAT"), get("PLAYFINDER_DEVICE_LON")) {
            (Some(lat), Some(lon)) => Some((
                lat.trim().parse::<f64>()?,
                lon.trim().parse::<f64>()?,
            )),
            (None, None) => None,
            _ => {
                return Err(AppError::ConfigError(
                    "PLAYFINDER_DEVICE_LAT and PLAYFINDER_DEVICE_LON must be set together"
                        .to_string(),
                ))
            }
        };

        Ok(Self {
            google_maps_api_key: get("GOOGLE_MAPS_API_KEY"),
            foursquare_api_key: get("FOURSQUARE_API_KEY"),
            eventbrite_token: get("EVENTBRITE_TOKEN"),
            places_provider,
            request_timeout,
            playground_radius_m: parse_or(
                get("PLAYFINDER_PLAYGROUND_RADIUS_M"),
                defaults.playground_radius_m,
            )?,
            event_radius_m: parse_or(get("PLAYFINDER_EVENT_RADIUS_M"), defaults.event_radius_m)?,
            result_limit,
            country: match get("PLAYFINDER_COUNTRY") {
                Some(value) if value.eq_ignore_ascii_case("any") => None,
                Some(value) => Some(value.trim().to_ascii_uppercase()),
                None => defaults.country,
            },
            device_position,
        })
    }

    pub fn require_google_key(&self) -> AppResult<&str> {
        require(&self.google_maps_api_key, "GOOGLE_MAPS_API_KEY")
    }

    pub fn require_foursquare_key(&self) -> AppResult<&str> {
        require(&self.foursquare_api_key, "FOURSQUARE_API_KEY")
    }

    pub fn require_eventbrite_token(&self) -> AppResult<&str> {
        require(&self.eventbrite_token, "EVENTBRITE_TOKEN")
    }
}

fn parse_or(value: Option<String>, default: u32) -> AppResult<u32> {
    match value {
        Some(value) => Ok(value.trim().parse()?),
        None => Ok(default),
    }
}

fn require<'a>(value: &'a Option<String>, name: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::ConfigError(format!("{} not found in environment", name)))
}
