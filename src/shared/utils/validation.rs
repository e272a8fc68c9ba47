use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::{AppError, AppResult};

/// Message shown for postal codes that fail the entry guard
pub const INVALID_POSTAL_CODE: &str = "Please enter a valid US ZIP code.";

/// 5-digit US ZIP with an optional 4-digit extension. ASCII digits only:
/// `\d` would also accept other Unicode digit scripts.
const POSTAL_CODE_PATTERN: &str = r"^[0-9]{5}(-[0-9]{4})?$";

fn postal_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(POSTAL_CODE_PATTERN).expect("postal code pattern is valid"))
}

pub struct Validator;

impl Validator {
    /// Exact match against the ZIP pattern, no trimming
    pub fn is_valid_postal_code(value: &str) -> bool {
        postal_code_regex().is_match(value)
    }

    /// Trim user input and check it is a ZIP code
    pub fn validate_postal_code(input: &str) -> AppResult<String> {
        let trimmed = input.trim();
        if Self::is_valid_postal_code(trimmed) {
            Ok(trimmed.to_string())
        } else {
            Err(AppError::ValidationError(INVALID_POSTAL_CODE.to_string()))
        }
    }

    pub fn validate_coordinate(latitude: f64, longitude: f64) -> AppResult<()> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::ValidationError(format!(
                "Latitude must be between -90 and 90 (got {})",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::ValidationError(format!(
                "Longitude must be between -180 and 180 (got {})",
                longitude
            )));
        }
        Ok(())
    }

    pub fn validate_radius(radius_meters: u32) -> AppResult<()> {
        if radius_meters == 0 {
            return Err(AppError::ValidationError(
                "Search radius must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_result_limit(limit: u32) -> AppResult<()> {
        if limit == 0 {
            return Err(AppError::ValidationError(
                "Result limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
