use serde::{Deserialize, Serialize};

use super::Category;
use crate::shared::config::DEFAULT_RESULT_LIMIT;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Parameters of one nearby search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub category: Category,
    pub radius_meters: u32,
    pub limit: u32,
}

impl SearchQuery {
    /// Query with the category's default radius
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            radius_meters: category.default_radius_meters(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_radius(self.radius_meters)?;
        Validator::validate_result_limit(self.limit)
    }

    /// Radius rounded to whole miles (at least one), for mile-based backends
    pub fn radius_miles(&self) -> u32 {
        let miles = (f64::from(self.radius_meters) / 1_609.344).round() as u32;
        miles.max(1)
    }
}
