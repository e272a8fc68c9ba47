/// Collaborator doubles: mockall mocks for call expectations, hand-written
/// fakes where a test needs to hold a response back.
use async_trait::async_trait;
use mockall::mock;
use playfinder_lib::{
    modules::{
        discovery::{NearbySearch, RawRecord, SearchOutcome, SearchQuery},
        location::{Coordinate, DeviceLocator, Geocoder, PostalCode, ResolvedLocation},
    },
    shared::errors::{AppResult, GeocodeFailure},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{oneshot, Mutex, Notify};

mock! {
    pub GeocoderService {}

    #[async_trait]
    impl Geocoder for GeocoderService {
        fn name(&self) -> &'static str;
        async fn geocode(&self, postal_code: &PostalCode) -> AppResult<ResolvedLocation>;
    }
}

mock! {
    pub SearchService {}

    #[async_trait]
    impl NearbySearch for SearchService {
        fn name(&self) -> &'static str;
        async fn search(
            &self,
            location: &ResolvedLocation,
            query: &SearchQuery,
        ) -> SearchOutcome<RawRecord>;
    }
}

mock! {
    pub Locator {}

    #[async_trait]
    impl DeviceLocator for Locator {
        async fn current_position(&self) -> AppResult<Coordinate>;
    }
}

/// Geocoder mock answering every ZIP code with `coordinate`
pub fn geocoder_at(coordinate: Coordinate) -> MockGeocoderService {
    let mut geocoder = MockGeocoderService::new();
    geocoder.expect_name().return_const("Mock Geocoder");
    geocoder
        .expect_geocode()
        .returning(move |_| Ok(ResolvedLocation::new(coordinate)));
    geocoder
}

/// Geocoder mock that must never be called
pub fn unused_geocoder() -> MockGeocoderService {
    let mut geocoder = MockGeocoderService::new();
    geocoder.expect_name().return_const("Mock Geocoder");
    geocoder.expect_geocode().times(0);
    geocoder
}

/// Device locator mock refusing access with `reason`
pub fn locator_denying(reason: &'static str) -> MockLocator {
    let mut locator = MockLocator::new();
    locator
        .expect_current_position()
        .times(1)
        .returning(move || Err(GeocodeFailure::LocationDenied(reason.to_string()).into()));
    locator
}

/// Search mock returning the same outcome on every call
pub fn search_returning(outcome: SearchOutcome<RawRecord>) -> MockSearchService {
    let mut search = MockSearchService::new();
    search.expect_name().return_const("Mock Search");
    search
        .expect_search()
        .returning(move |_, _| outcome.clone());
    search
}

/// Search mock that must never be called
pub fn unused_search() -> MockSearchService {
    let mut search = MockSearchService::new();
    search.expect_name().return_const("Mock Search");
    search.expect_search().times(0);
    search
}

/// The first call waits for a response sent through the gate; later calls
/// answer immediately.
pub struct GatedSearch {
    gate: Mutex<Option<oneshot::Receiver<SearchOutcome<RawRecord>>>>,
    immediate: SearchOutcome<RawRecord>,
    waiting: Notify,
    calls: AtomicUsize,
}

impl GatedSearch {
    pub fn new(
        gate: oneshot::Receiver<SearchOutcome<RawRecord>>,
        immediate: SearchOutcome<RawRecord>,
    ) -> Self {
        Self {
            gate: Mutex::new(Some(gate)),
            immediate,
            waiting: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolves once the first call is parked on the gate
    pub async fn first_call_waiting(&self) {
        self.waiting.notified().await;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NearbySearch for GatedSearch {
    fn name(&self) -> &'static str {
        "Gated Search"
    }

    async fn search(
        &self,
        _location: &ResolvedLocation,
        _query: &SearchQuery,
    ) -> SearchOutcome<RawRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().await.take();
        match gate {
            Some(gate) => {
                self.waiting.notify_one();
                gate.await.unwrap_or(SearchOutcome::EmptyResult)
            }
            None => self.immediate.clone(),
        }
    }
}

/// Never answers
pub struct StalledGeocoder;

#[async_trait]
impl Geocoder for StalledGeocoder {
    fn name(&self) -> &'static str {
        "Stalled Geocoder"
    }

    async fn geocode(&self, _postal_code: &PostalCode) -> AppResult<ResolvedLocation> {
        std::future::pending().await
    }
}

/// Never answers
pub struct StalledSearch;

#[async_trait]
impl NearbySearch for StalledSearch {
    fn name(&self) -> &'static str {
        "Stalled Search"
    }

    async fn search(
        &self,
        _location: &ResolvedLocation,
        _query: &SearchQuery,
    ) -> SearchOutcome<RawRecord> {
        std::future::pending().await
    }
}
