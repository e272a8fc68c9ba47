//! Status texts shown to the user

use crate::{
    modules::{
        discovery::{Category, SearchOutcome},
        presentation::StatusMessage,
    },
    shared::errors::GeocodeFailure,
};

pub const INVALID_ZIP_CODE: &str = "Invalid ZIP code.";
pub const NO_RESULTS: &str = "No results found nearby.";
pub const LOCATION_DENIED: &str = "Location access denied. Please search by ZIP code.";

pub fn loading(category: Category) -> StatusMessage {
    StatusMessage::info(format!("Loading {}...", category.plural()))
}

/// Status line for a finished cycle; `None` when results are shown instead
pub fn for_outcome(category: Category, outcome: &SearchOutcome) -> Option<StatusMessage> {
    match outcome {
        SearchOutcome::Success(_) => None,
        SearchOutcome::EmptyResult => Some(StatusMessage::info(NO_RESULTS)),
        SearchOutcome::GeocodeFailure(GeocodeFailure::NotFound) => {
            Some(StatusMessage::error(INVALID_ZIP_CODE))
        }
        SearchOutcome::GeocodeFailure(GeocodeFailure::LocationDenied(reason)) => {
            let text = if reason.trim().is_empty() {
                LOCATION_DENIED
            } else {
                reason.as_str()
            };
            Some(StatusMessage::error(text))
        }
        SearchOutcome::NetworkFailure(failure) => Some(StatusMessage::error(format!(
            "Error loading {}: {}",
            category.plural(),
            failure
        ))),
    }
}
