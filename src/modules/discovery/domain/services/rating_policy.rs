use crate::modules::discovery::domain::entities::{PlaceResult, SearchResult};

/// Minimum rating for a playground to be shown when any result qualifies
pub const MIN_RATING: f64 = 3.5;

/// Quality filter with fallback to the unfiltered list.
///
/// If nothing clears the threshold the input comes back untouched, so a
/// neighbourhood of unrated parks still shows something. Order is preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingPolicy {
    threshold: f64,
}

impl Default for RatingPolicy {
    fn default() -> Self {
        Self {
            threshold: MIN_RATING,
        }
    }
}

impl RatingPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn qualifies(&self, place: &PlaceResult) -> bool {
        place.rating.is_some_and(|rating| rating >= self.threshold)
    }

    pub fn filter(&self, places: Vec<PlaceResult>) -> Vec<PlaceResult> {
        if !places.iter().any(|place| self.qualifies(place)) {
            return places;
        }
        places
            .into_iter()
            .filter(|place| self.qualifies(place))
            .collect()
    }

    /// Same rule over mixed results; events always pass
    pub fn apply(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        let any_qualifies = results
            .iter()
            .filter_map(SearchResult::as_place)
            .any(|place| self.qualifies(place));
        if !any_qualifies {
            return results;
        }
        results
            .into_iter()
            .filter(|result| match result {
                SearchResult::Place(place) => self.qualifies(place),
                SearchResult::Event(_) => true,
            })
            .collect()
    }
}
