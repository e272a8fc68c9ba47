use crate::modules::discovery::domain::entities::SearchResult;
use crate::shared::errors::{AppError, GeocodeFailure, NetworkFailure};

/// Terminal result of a search step or a whole cycle.
///
/// Search adapters produce `SearchOutcome<RawRecord>`; the orchestrator turns
/// it into `SearchOutcome<SearchResult>` after normalization and filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T = SearchResult> {
    Success(Vec<T>),
    /// A well-formed answer with nothing in it. Informational, not an error.
    EmptyResult,
    GeocodeFailure(GeocodeFailure),
    NetworkFailure(NetworkFailure),
}

impl<T> SearchOutcome<T> {
    /// `Success` for a non-empty list, `EmptyResult` otherwise
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            SearchOutcome::EmptyResult
        } else {
            SearchOutcome::Success(items)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SearchOutcome::GeocodeFailure(_) | SearchOutcome::NetworkFailure(_)
        )
    }

    pub fn items(&self) -> &[T] {
        match self {
            SearchOutcome::Success(items) => items,
            _ => &[],
        }
    }

    /// Transform the success payload; an emptied payload becomes `EmptyResult`
    pub fn map_items<U, F>(self, f: F) -> SearchOutcome<U>
    where
        F: FnOnce(Vec<T>) -> Vec<U>,
    {
        match self {
            SearchOutcome::Success(items) => SearchOutcome::from_items(f(items)),
            SearchOutcome::EmptyResult => SearchOutcome::EmptyResult,
            SearchOutcome::GeocodeFailure(failure) => SearchOutcome::GeocodeFailure(failure),
            SearchOutcome::NetworkFailure(failure) => SearchOutcome::NetworkFailure(failure),
        }
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Success(_) => "success",
            SearchOutcome::EmptyResult => "empty result",
            SearchOutcome::GeocodeFailure(_) => "geocode failure",
            SearchOutcome::NetworkFailure(_) => "network failure",
        }
    }
}

impl<T> From<AppError> for SearchOutcome<T> {
    fn from(err: AppError) -> Self {
        match err {
            AppError::GeocodeFailure(failure) => SearchOutcome::GeocodeFailure(failure),
            AppError::NetworkFailure(failure) => SearchOutcome::NetworkFailure(failure),
            other => SearchOutcome::NetworkFailure(NetworkFailure::Backend(other.to_string())),
        }
    }
}
