use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    modules::location::domain::{Coordinate, DeviceLocator},
    shared::{
        config::AppConfig,
        errors::{AppResult, GeocodeFailure},
    },
};

pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation not supported. Please enter a ZIP code.";

/// Reports a fixed position, e.g. one configured for a kiosk install
pub struct StaticDeviceLocator {
    position: Coordinate,
}

impl StaticDeviceLocator {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DeviceLocator for StaticDeviceLocator {
    async fn current_position(&self) -> AppResult<Coordinate> {
        Ok(self.position)
    }
}

/// A device without geolocation support
#[derive(Default)]
pub struct UnavailableDeviceLocator;

#[async_trait]
impl DeviceLocator for UnavailableDeviceLocator {
    async fn current_position(&self) -> AppResult<Coordinate> {
        Err(GeocodeFailure::LocationDenied(GEOLOCATION_UNSUPPORTED.to_string()).into())
    }
}

pub fn device_locator_from_config(config: &AppConfig) -> AppResult<Arc<dyn DeviceLocator>> {
    match config.device_position {
        Some((latitude, longitude)) => Ok(Arc::new(StaticDeviceLocator::new(
            Coordinate::try_new(latitude, longitude)?,
        ))),
        None => {
            log::debug!("No device position configured; device searches will be denied");
            Ok(Arc::new(UnavailableDeviceLocator))
        }
    }
}
