/// Search Orchestrator Integration Tests
///
/// Drive full cycles against mocked backends and inspect what reached the
/// recording sink.
mod utils;

use playfinder_lib::{
    modules::{
        discovery::{Category, RawRecord, SearchBackends, SearchOutcome, SearchQuery, SearchResult},
        location::{Coordinate, PostalCode, ResolvedLocation, StaticDeviceLocator},
        presentation::{MessageKind, SinkCall, StatusMessage},
        search::{messages, CycleReport, CycleState, SearchSettings, Trigger},
    },
    shared::errors::{AppError, GeocodeFailure, NetworkFailure},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio_test::{assert_err, assert_ok};
use utils::{
    factories::{EventbriteEventFactory, GooglePlaceFactory},
    fakes::{
        geocoder_at, locator_denying, search_returning, unused_geocoder, unused_search,
        GatedSearch, MockGeocoderService, MockSearchService, StalledGeocoder, StalledSearch,
    },
    helpers::{build_orchestrator, playground_orchestrator, test_settings},
};

const PROVO: Coordinate = Coordinate {
    latitude: 40.23,
    longitude: -111.66,
};
const BEVERLY_HILLS: Coordinate = Coordinate {
    latitude: 34.09,
    longitude: -118.41,
};

fn zip(code: &str) -> Trigger {
    Trigger::ZipButton(code.to_string())
}

fn provo_places() -> Vec<RawRecord> {
    vec![
        GooglePlaceFactory::new()
            .with_name("Kiwanis Park")
            .with_rating(4.2)
            .with_place_id("kiwanis")
            .with_location(40.2501, -111.6493)
            .build(),
        GooglePlaceFactory::new()
            .with_name("Exchange Park")
            .with_location(40.2402, -111.6610)
            .build(),
        GooglePlaceFactory::new()
            .with_name("Pioneer Park")
            .with_location(40.2310, -111.6650)
            .build(),
    ]
}

// ================================================================================================
// END-TO-END SCENARIOS
// ================================================================================================

#[tokio::test]
async fn zip_84601_renders_one_card_and_one_marker() {
    let mut geocoder = MockGeocoderService::new();
    geocoder.expect_name().return_const("Mock Geocoder");
    geocoder
        .expect_geocode()
        .withf(|postal_code: &PostalCode| postal_code.as_str() == "84601")
        .times(1)
        .returning(|_| Ok(ResolvedLocation::new(PROVO)));

    let mut search = MockSearchService::new();
    search.expect_name().return_const("Mock Search");
    search
        .expect_search()
        .withf(|location, query| {
            location.coordinate() == PROVO
                && query.category == Category::Playground
                && query.radius_meters == 5000
        })
        .times(1)
        .returning(|_, _| SearchOutcome::Success(provo_places()));

    let orchestrator = playground_orchestrator(geocoder, search);
    let report = assert_ok!(orchestrator.handle(zip("84601"), Category::Playground).await);

    match &report {
        CycleReport::Completed { outcome, path, .. } => {
            assert_eq!(outcome.items().len(), 1);
            assert_eq!(outcome.items()[0].title(), "Kiwanis Park");
            assert_eq!(
                path,
                &vec![
                    CycleState::Idle,
                    CycleState::Resolving,
                    CycleState::Searching,
                    CycleState::Rendering,
                    CycleState::Idle,
                ]
            );
        }
        other => panic!("expected a completed cycle, got {:?}", other),
    }

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(sink.card_count(), 1);
    assert_eq!(sink.places()[0].name, "Kiwanis Park");
    assert_eq!(sink.markers().len(), 1);
    assert_eq!(sink.markers()[0].label, "Kiwanis Park");
    assert_eq!(sink.center(), Some(PROVO));
    assert!(sink.message().is_none());
    assert_eq!(orchestrator.state(), CycleState::Idle);
}

#[tokio::test]
async fn zip_00000_fails_with_invalid_zip_message() {
    let mut geocoder = MockGeocoderService::new();
    geocoder.expect_name().return_const("Mock Geocoder");
    geocoder
        .expect_geocode()
        .times(1)
        .returning(|_| Err(GeocodeFailure::NotFound.into()));

    let orchestrator = playground_orchestrator(geocoder, unused_search());
    let report = assert_ok!(orchestrator.handle(zip("00000"), Category::Playground).await);

    match &report {
        CycleReport::Completed { outcome, path, .. } => {
            assert_eq!(outcome, &SearchOutcome::GeocodeFailure(GeocodeFailure::NotFound));
            assert!(path.contains(&CycleState::Failed));
            assert_eq!(path.last(), Some(&CycleState::Idle));
        }
        other => panic!("expected a completed cycle, got {:?}", other),
    }

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(sink.card_count(), 0);
    assert!(sink.markers().is_empty());
    assert_eq!(
        sink.message(),
        Some(&StatusMessage::error(messages::INVALID_ZIP_CODE))
    );
}

#[tokio::test]
async fn zip_90210_with_no_results_shows_info_after_clear() {
    let orchestrator = playground_orchestrator(
        geocoder_at(BEVERLY_HILLS),
        search_returning(SearchOutcome::EmptyResult),
    );
    let report = assert_ok!(orchestrator.handle(zip("90210"), Category::Playground).await);
    assert_eq!(report.outcome(), Some(&SearchOutcome::EmptyResult));

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    let message = sink.message().expect("a status message");
    assert_eq!(message.text, messages::NO_RESULTS);
    assert_eq!(message.kind, MessageKind::Info);

    let calls = sink.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[calls.len() - 2], SinkCall::Clear);
    assert_eq!(
        sink.calls_since_clear(),
        &[SinkCall::ShowMessage(StatusMessage::info(messages::NO_RESULTS))]
    );
}

// ================================================================================================
// ENTRY GUARD
// ================================================================================================

#[tokio::test]
async fn invalid_zip_never_reaches_the_network() {
    let orchestrator = playground_orchestrator(unused_geocoder(), unused_search());

    for input in ["8460", "84601-12", "abcde", "", "846011"] {
        let err = assert_err!(orchestrator.handle(zip(input), Category::Playground).await);
        assert!(err.is_validation(), "{:?} should be a validation error", input);
    }

    let err = assert_err!(
        orchestrator
            .handle(Trigger::EnterKey("９０２１０".to_string()), Category::Playground)
            .await
    );
    assert!(err.is_validation());

    let sink = orchestrator.sink();
    assert!(sink.lock().await.calls().is_empty());
    assert_eq!(orchestrator.state(), CycleState::Idle);
}

#[tokio::test]
async fn invalid_zip_leaves_the_in_flight_cycle_alone() {
    let (release, gate) = oneshot::channel();
    let search = Arc::new(GatedSearch::new(gate, SearchOutcome::EmptyResult));
    let orchestrator = build_orchestrator(
        Arc::new(geocoder_at(PROVO)),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(Some(search.clone()), None),
    );

    let in_flight = orchestrator.handle(zip("84601"), Category::Playground);
    let interrupt = async {
        search.first_call_waiting().await;
        let rejected = orchestrator.handle(zip("12"), Category::Playground).await;
        release
            .send(SearchOutcome::Success(provo_places()))
            .expect("cycle still waiting");
        rejected
    };

    let (report, rejected) = futures::future::join(in_flight, interrupt).await;

    assert!(matches!(rejected, Err(AppError::ValidationError(_))));
    let report = assert_ok!(report);
    assert!(!report.is_superseded());
    assert_eq!(report.outcome().map(|o| o.items().len()), Some(1));
}

// ================================================================================================
// SINGLE-FLIGHT
// ================================================================================================

#[tokio::test]
async fn late_response_of_a_superseded_cycle_is_discarded() {
    let (release_a, gate_a) = oneshot::channel();
    let b_results = vec![GooglePlaceFactory::new()
        .with_name("Roxbury Park")
        .with_rating(4.6)
        .with_location(34.0616, -118.4019)
        .build()];
    let search = Arc::new(GatedSearch::new(
        gate_a,
        SearchOutcome::Success(b_results),
    ));

    let mut geocoder = MockGeocoderService::new();
    geocoder.expect_name().return_const("Mock Geocoder");
    geocoder.expect_geocode().times(2).returning(|postal_code| {
        let coordinate = match postal_code.as_str() {
            "84601" => PROVO,
            _ => BEVERLY_HILLS,
        };
        Ok(ResolvedLocation::new(coordinate))
    });

    let orchestrator = build_orchestrator(
        Arc::new(geocoder),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(Some(search.clone()), None),
    );

    let cycle_a = orchestrator.handle(zip("84601"), Category::Playground);
    let cycle_b = async {
        search.first_call_waiting().await;
        let report = orchestrator.handle(zip("90210"), Category::Playground).await;
        // A's answer arrives after B finished; nobody is listening any more
        let _ = release_a.send(SearchOutcome::Success(provo_places()));
        report
    };

    let (report_a, report_b) = tokio::join!(cycle_a, cycle_b);
    let report_a = assert_ok!(report_a);
    let report_b = assert_ok!(report_b);

    assert_eq!(report_a, CycleReport::Superseded { cycle: 1 });
    assert_eq!(report_b.cycle(), 2);
    assert!(!report_b.is_superseded());
    assert_eq!(search.calls(), 2);

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(sink.card_count(), 1);
    assert_eq!(sink.places()[0].name, "Roxbury Park");
    assert_eq!(sink.center(), Some(BEVERLY_HILLS));
    let rendered_a = sink.calls().iter().any(|call| {
        matches!(call, SinkCall::RenderPlace(place) if place.name == "Kiwanis Park")
    });
    assert!(!rendered_a);
    assert_eq!(orchestrator.state(), CycleState::Idle);
}

// ================================================================================================
// FAILURES
// ================================================================================================

#[tokio::test]
async fn search_timeout_is_a_network_failure() {
    let orchestrator = build_orchestrator(
        Arc::new(geocoder_at(PROVO)),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(Some(Arc::new(StalledSearch)), None),
    )
    .with_settings(SearchSettings {
        request_timeout: Duration::from_millis(50),
        ..test_settings()
    });

    let report = assert_ok!(orchestrator.handle(zip("84601"), Category::Playground).await);
    assert_eq!(
        report.outcome(),
        Some(&SearchOutcome::NetworkFailure(NetworkFailure::Timeout))
    );

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(
        sink.message().map(|m| m.text.as_str()),
        Some("Error loading playgrounds: request timed out")
    );
}

#[tokio::test]
async fn geocode_timeout_fails_the_cycle_before_searching() {
    let orchestrator = build_orchestrator(
        Arc::new(StalledGeocoder),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(Some(Arc::new(unused_search())), None),
    )
    .with_settings(SearchSettings {
        request_timeout: Duration::from_millis(50),
        ..test_settings()
    });

    let report = assert_ok!(orchestrator.handle(zip("84601"), Category::Playground).await);
    match report {
        CycleReport::Completed { outcome, path, .. } => {
            assert_eq!(outcome, SearchOutcome::NetworkFailure(NetworkFailure::Timeout));
            assert_eq!(
                path,
                vec![
                    CycleState::Idle,
                    CycleState::Resolving,
                    CycleState::Failed,
                    CycleState::Idle,
                ]
            );
        }
        other => panic!("expected a completed cycle, got {:?}", other),
    }

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    let message = sink.message().expect("a status message");
    assert!(message.is_error());
    assert_eq!(message.text, "Error loading playgrounds: request timed out");
    assert_eq!(sink.card_count(), 0);
}

#[tokio::test]
async fn backend_error_status_is_shown_as_error() {
    let orchestrator = playground_orchestrator(
        geocoder_at(PROVO),
        search_returning(SearchOutcome::NetworkFailure(NetworkFailure::Status(503))),
    );

    let report = assert_ok!(orchestrator.handle(zip("84601"), Category::Playground).await);
    match report {
        CycleReport::Completed { path, .. } => {
            assert_eq!(
                path,
                vec![
                    CycleState::Idle,
                    CycleState::Resolving,
                    CycleState::Searching,
                    CycleState::Failed,
                    CycleState::Idle,
                ]
            );
        }
        other => panic!("expected a completed cycle, got {:?}", other),
    }

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    let message = sink.message().expect("a status message");
    assert!(message.is_error());
    assert_eq!(message.text, "Error loading playgrounds: HTTP status 503");
    assert_eq!(sink.card_count(), 0);
}

#[tokio::test]
async fn missing_backend_is_a_config_error_before_the_cycle() {
    let orchestrator = playground_orchestrator(unused_geocoder(), unused_search());

    let err = assert_err!(orchestrator.handle(zip("84601"), Category::Event).await);
    assert!(matches!(err, AppError::ConfigError(_)));

    let sink = orchestrator.sink();
    assert!(sink.lock().await.calls().is_empty());
}

// ================================================================================================
// DEVICE LOCATION
// ================================================================================================

#[tokio::test]
async fn page_load_uses_device_position_without_geocoding() {
    let mut search = MockSearchService::new();
    search.expect_name().return_const("Mock Search");
    search
        .expect_search()
        .withf(|location, _| location.coordinate() == PROVO)
        .times(1)
        .returning(|_, _| SearchOutcome::Success(provo_places()));

    let orchestrator = build_orchestrator(
        Arc::new(unused_geocoder()),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(Some(Arc::new(search)), None),
    );

    let report = assert_ok!(orchestrator.handle(Trigger::PageLoad, Category::Playground).await);
    assert_eq!(report.outcome().map(|o| o.items().len()), Some(1));
}

#[tokio::test]
async fn device_denial_is_reported_to_the_user() {
    let orchestrator = playground_orchestrator(unused_geocoder(), unused_search());

    let report = assert_ok!(
        orchestrator
            .handle(Trigger::DeviceLocation, Category::Playground)
            .await
    );
    assert!(matches!(
        report.outcome(),
        Some(SearchOutcome::GeocodeFailure(GeocodeFailure::LocationDenied(_)))
    ));

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(
        sink.message().map(|m| m.text.as_str()),
        Some("Geolocation not supported. Please enter a ZIP code.")
    );
}

#[tokio::test]
async fn device_denial_reason_is_shown_verbatim() {
    let orchestrator = build_orchestrator(
        Arc::new(unused_geocoder()),
        Arc::new(locator_denying("User denied Geolocation")),
        SearchBackends::new(Some(Arc::new(unused_search())), None),
    );

    let report = assert_ok!(orchestrator.handle(Trigger::PageLoad, Category::Playground).await);
    assert_eq!(
        report.outcome(),
        Some(&SearchOutcome::GeocodeFailure(GeocodeFailure::LocationDenied(
            "User denied Geolocation".to_string()
        )))
    );

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(
        sink.message(),
        Some(&StatusMessage::error("User denied Geolocation"))
    );
}

// ================================================================================================
// EVENTS
// ================================================================================================

#[tokio::test]
async fn event_radius_beyond_places_maximum_is_accepted() {
    let mut search = MockSearchService::new();
    search.expect_name().return_const("Mock Events");
    search
        .expect_search()
        .withf(|_, query| query.radius_meters == 80_467 && query.radius_miles() == 50)
        .times(1)
        .returning(|_, _| SearchOutcome::EmptyResult);

    let orchestrator = build_orchestrator(
        Arc::new(geocoder_at(PROVO)),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(None, Some(Arc::new(search))),
    );

    let query = SearchQuery::for_category(Category::Event).with_radius(80_467);
    let report = assert_ok!(orchestrator.handle_query(zip("84601"), query).await);
    assert_eq!(report.outcome(), Some(&SearchOutcome::EmptyResult));
}

#[tokio::test]
async fn zero_result_limit_is_rejected_before_the_cycle() {
    let orchestrator = playground_orchestrator(unused_geocoder(), unused_search());

    let query = SearchQuery::for_category(Category::Playground).with_limit(0);
    let err = assert_err!(orchestrator.handle_query(zip("84601"), query).await);
    assert!(err.is_validation());

    let sink = orchestrator.sink();
    assert!(sink.lock().await.calls().is_empty());
}

#[tokio::test]
async fn events_render_cards_without_markers_or_rating_filter() {
    let mut search = MockSearchService::new();
    search.expect_name().return_const("Mock Events");
    search
        .expect_search()
        .withf(|_, query| query.category == Category::Event && query.radius_meters == 16093)
        .times(1)
        .returning(|_, _| {
            SearchOutcome::Success(vec![
                EventbriteEventFactory::new()
                    .with_title("Toddler Story Time")
                    .with_description(&"x".repeat(200))
                    .build(),
                EventbriteEventFactory::sparse().build(),
            ])
        });

    let orchestrator = build_orchestrator(
        Arc::new(geocoder_at(PROVO)),
        Arc::new(StaticDeviceLocator::new(PROVO)),
        SearchBackends::new(None, Some(Arc::new(search))),
    );

    let report = assert_ok!(orchestrator.handle(zip("84601"), Category::Event).await);
    let outcome = report.outcome().expect("completed cycle");
    assert_eq!(outcome.items().len(), 2);
    assert!(matches!(outcome.items()[1], SearchResult::Event(_)));

    let sink = orchestrator.sink();
    let sink = sink.lock().await;
    assert_eq!(sink.events().len(), 2);
    assert_eq!(sink.events()[0].description.chars().count(), 153);
    assert_eq!(sink.events()[1].title, "Untitled event");
    assert!(sink.markers().is_empty());
    assert!(sink
        .calls()
        .contains(&SinkCall::ShowMessage(StatusMessage::info("Loading events..."))));
}

#[tokio::test]
async fn state_changes_are_published() {
    let orchestrator = playground_orchestrator(
        geocoder_at(PROVO),
        search_returning(SearchOutcome::EmptyResult),
    );
    let mut states = orchestrator.subscribe_state();

    assert_ok!(orchestrator.handle(zip("84601"), Category::Playground).await);

    assert!(states.has_changed().unwrap());
    assert_eq!(*states.borrow_and_update(), CycleState::Idle);
}
