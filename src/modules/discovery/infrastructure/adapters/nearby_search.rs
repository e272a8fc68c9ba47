use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::raw_record::RawRecord;
use crate::{
    modules::{
        discovery::domain::{SearchOutcome, SearchQuery},
        location::ResolvedLocation,
    },
    shared::utils::LogContext,
};

/// Places/events backend contract
///
/// One outbound request per call and no retries. Non-2xx statuses become
/// `NetworkFailure(Status)`, a 2xx answer with no items is `EmptyResult`.
/// Records still need to go through the normalizer.
#[async_trait]
pub trait NearbySearch: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(
        &self,
        location: &ResolvedLocation,
        query: &SearchQuery,
    ) -> SearchOutcome<RawRecord>;
}

/// Decode items one by one so a single odd record does not sink the response
pub(crate) fn decode_items<T>(provider: &str, items: Vec<serde_json::Value>) -> Vec<T>
where
    T: DeserializeOwned,
{
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                LogContext::skipped_record(provider, &e);
                None
            }
        })
        .collect()
}
