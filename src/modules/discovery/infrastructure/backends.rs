use std::sync::Arc;

use super::adapters::{EventbriteAdapter, FoursquareAdapter, GooglePlacesAdapter, NearbySearch};
use crate::{
    modules::discovery::domain::Category,
    shared::{
        config::{AppConfig, PlacesProvider},
        errors::{AppError, AppResult},
    },
};

/// One search backend per category. A missing backend is a configuration
/// error raised before any cycle starts.
#[derive(Clone, Default)]
pub struct SearchBackends {
    playgrounds: Option<Arc<dyn NearbySearch>>,
    events: Option<Arc<dyn NearbySearch>>,
}

impl SearchBackends {
    pub fn new(
        playgrounds: Option<Arc<dyn NearbySearch>>,
        events: Option<Arc<dyn NearbySearch>>,
    ) -> Self {
        Self {
            playgrounds,
            events,
        }
    }

    /// Builds whichever backends have credentials configured
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let playgrounds: Option<Arc<dyn NearbySearch>> = match config.places_provider {
            PlacesProvider::Google if config.google_maps_api_key.is_some() => {
                Some(Arc::new(GooglePlacesAdapter::from_config(config)?))
            }
            PlacesProvider::Foursquare if config.foursquare_api_key.is_some() => {
                Some(Arc::new(FoursquareAdapter::from_config(config)?))
            }
            _ => None,
        };

        let events: Option<Arc<dyn NearbySearch>> = match config.eventbrite_token {
            Some(_) => Some(Arc::new(EventbriteAdapter::from_config(config)?)),
            None => None,
        };

        log::debug!(
            "Search backends: playgrounds={}, events={}",
            playgrounds.as_ref().map_or("none", |b| b.name()),
            events.as_ref().map_or("none", |b| b.name())
        );

        Ok(Self::new(playgrounds, events))
    }

    pub fn for_category(&self, category: Category) -> AppResult<Arc<dyn NearbySearch>> {
        let backend = match category {
            Category::Playground => &self.playgrounds,
            Category::Event => &self.events,
        };
        backend.clone().ok_or_else(|| {
            AppError::ConfigError(format!("No search backend configured for {}", category.plural()))
        })
    }
}

impl std::fmt::Debug for SearchBackends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBackends")
            .field("playgrounds", &self.playgrounds.as_ref().map(|b| b.name()))
            .field("events", &self.events.as_ref().map(|b| b.name()))
            .finish()
    }
}
