use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::config::{DEFAULT_EVENT_RADIUS_M, DEFAULT_PLAYGROUND_RADIUS_M};
use crate::shared::errors::AppError;

/// What the user is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Playground,
    Event,
}

impl Category {
    pub fn default_radius_meters(self) -> u32 {
        match self {
            Category::Playground => DEFAULT_PLAYGROUND_RADIUS_M,
            Category::Event => DEFAULT_EVENT_RADIUS_M,
        }
    }

    /// Used in status lines ("Loading playgrounds...")
    pub fn plural(self) -> &'static str {
        match self {
            Category::Playground => "playgrounds",
            Category::Event => "events",
        }
    }

    /// Free-text keyword sent to keyword-based places backends
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Playground => "playground",
            Category::Event => "event",
        }
    }

    /// Only place listings carry ratings worth filtering on
    pub fn applies_rating_filter(self) -> bool {
        matches!(self, Category::Playground)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Playground => f.write_str("playground"),
            Category::Event => f.write_str("event"),
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playground" | "playgrounds" => Ok(Category::Playground),
            "event" | "events" => Ok(Category::Event),
            other => Err(AppError::ValidationError(format!(
                "Unknown category '{}'",
                other
            ))),
        }
    }
}
