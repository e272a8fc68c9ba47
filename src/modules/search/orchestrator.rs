use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};

use super::cycle_state::{CycleState, CycleStateMachine};
use super::messages;
use super::single_flight::{CycleTicket, SingleFlight};
use super::trigger::{HintSource, Trigger};
use crate::{
    modules::{
        discovery::{
            normalize_all, Category, RatingPolicy, SearchBackends, SearchOutcome, SearchQuery,
            SearchResult,
        },
        location::{
            device_locator_from_config, resolve_hint, DeviceLocator, Geocoder, GoogleGeocoder,
            LocationHint, ResolvedLocation,
        },
        presentation::{MarkerPopup, PresentationSink},
    },
    shared::{
        config::{AppConfig, DEFAULT_RESULT_LIMIT, DEFAULT_TIMEOUT_SECS},
        errors::{AppResult, NetworkFailure},
        utils::{LogContext, TimedOperation},
    },
};

/// Per-cycle knobs taken from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    pub request_timeout: Duration,
    pub playground_radius_m: u32,
    pub event_radius_m: u32,
    pub result_limit: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            playground_radius_m: Category::Playground.default_radius_meters(),
            event_radius_m: Category::Event.default_radius_meters(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            request_timeout: config.request_timeout,
            playground_radius_m: config.playground_radius_m,
            event_radius_m: config.event_radius_m,
            result_limit: config.result_limit,
        }
    }

    pub fn query_for(&self, category: Category) -> SearchQuery {
        let radius = match category {
            Category::Playground => self.playground_radius_m,
            Category::Event => self.event_radius_m,
        };
        SearchQuery::for_category(category)
            .with_radius(radius)
            .with_limit(self.result_limit)
    }
}

/// How a cycle ended
#[derive(Debug, Clone, PartialEq)]
pub enum CycleReport {
    /// The cycle wrote its outcome to the sink
    Completed {
        cycle: u64,
        outcome: SearchOutcome,
        path: Vec<CycleState>,
    },
    /// A newer cycle started first; nothing was written
    Superseded { cycle: u64 },
}

impl CycleReport {
    pub fn cycle(&self) -> u64 {
        match self {
            CycleReport::Completed { cycle, .. } | CycleReport::Superseded { cycle } => *cycle,
        }
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match self {
            CycleReport::Completed { outcome, .. } => Some(outcome),
            CycleReport::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, CycleReport::Superseded { .. })
    }
}

/// Drives resolve, search, normalize, filter and render for each trigger.
///
/// Cycles may overlap; the newest one cancels the others and is the only
/// one allowed to write to the sink.
pub struct SearchOrchestrator<S: PresentationSink> {
    geocoder: Arc<dyn Geocoder>,
    device_locator: Arc<dyn DeviceLocator>,
    backends: SearchBackends,
    policy: RatingPolicy,
    sink: Arc<Mutex<S>>,
    flight: SingleFlight,
    state_tx: watch::Sender<CycleState>,
    settings: SearchSettings,
}

impl<S: PresentationSink> SearchOrchestrator<S> {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        device_locator: Arc<dyn DeviceLocator>,
        backends: SearchBackends,
        sink: S,
    ) -> Self {
        let (state_tx, _) = watch::channel(CycleState::Idle);
        Self {
            geocoder,
            device_locator,
            backends,
            policy: RatingPolicy::default(),
            sink: Arc::new(Mutex::new(sink)),
            flight: SingleFlight::new(),
            state_tx,
            settings: SearchSettings::default(),
        }
    }

    /// Wire the Google geocoder and the configured backends
    pub fn from_config(config: &AppConfig, sink: S) -> AppResult<Self> {
        let geocoder = Arc::new(GoogleGeocoder::from_config(config)?);
        let device_locator = device_locator_from_config(config)?;
        let backends = SearchBackends::from_config(config)?;
        Ok(Self::new(geocoder, device_locator, backends, sink)
            .with_settings(SearchSettings::from_config(config)))
    }

    pub fn with_policy(mut self, policy: RatingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn sink(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.sink)
    }

    /// State of the most recent cycle
    pub fn state(&self) -> CycleState {
        *self.state_tx.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<CycleState> {
        self.state_tx.subscribe()
    }

    pub async fn handle(&self, trigger: Trigger, category: Category) -> AppResult<CycleReport> {
        self.handle_query(trigger, self.settings.query_for(category))
            .await
    }

    /// Run one search cycle.
    ///
    /// `Err` only for input or configuration problems, detected before the
    /// cycle starts; the sink and any in-flight cycle are left untouched.
    /// Everything after that ends as a `CycleReport`.
    pub async fn handle_query(&self, trigger: Trigger, query: SearchQuery) -> AppResult<CycleReport> {
        let label = trigger.label();
        query.validate()?;
        let source = trigger.into_source()?;
        let backend = self.backends.for_category(query.category)?;

        let ticket = self.flight.begin();
        let timer = TimedOperation::start();
        let mut machine = CycleStateMachine::new();
        log::debug!(
            "Search: cycle {} started by {} for {}",
            ticket.id(),
            label,
            query.category.plural()
        );

        self.enter(&ticket, &mut machine, CycleState::Resolving)?;
        let location = match ticket.run(self.bounded(self.resolve(source))).await {
            None => return Ok(self.superseded(&ticket)),
            Some(Ok(location)) => location,
            Some(Err(err)) => {
                return self
                    .fail(&ticket, machine, query.category, SearchOutcome::from(err))
                    .await
            }
        };

        self.enter(&ticket, &mut machine, CycleState::Searching)?;
        {
            let mut sink = self.sink.lock().await;
            if !self.flight.is_current(&ticket) {
                return Ok(self.superseded(&ticket));
            }
            sink.clear();
            sink.show_message(messages::loading(query.category));
        }

        let search = tokio::time::timeout(
            self.settings.request_timeout,
            backend.search(&location, &query),
        );
        let raw = match ticket.run(search).await {
            None => return Ok(self.superseded(&ticket)),
            Some(Ok(raw)) => raw,
            Some(Err(_)) => SearchOutcome::NetworkFailure(NetworkFailure::Timeout),
        };

        let outcome = raw.map_items(|records| {
            let results = normalize_all(records);
            if query.category.applies_rating_filter() {
                self.policy.apply(results)
            } else {
                results
            }
        });
        if outcome.is_failure() {
            return self.fail(&ticket, machine, query.category, outcome).await;
        }

        self.enter(&ticket, &mut machine, CycleState::Rendering)?;
        {
            let mut sink = self.sink.lock().await;
            if !self.flight.is_current(&ticket) {
                return Ok(self.superseded(&ticket));
            }
            Self::write_outcome(&mut *sink, Some(&location), query.category, &outcome);
        }
        self.enter(&ticket, &mut machine, CycleState::Idle)?;
        self.flight.finish(&ticket);

        LogContext::search_cycle(
            ticket.id(),
            query.category.plural(),
            outcome.label(),
            Some(outcome.items().len()),
        );
        log::debug!("Search: cycle {} took {}ms", ticket.id(), timer.elapsed_ms());

        Ok(CycleReport::Completed {
            cycle: ticket.id(),
            outcome,
            path: machine.into_path(),
        })
    }

    async fn resolve(&self, source: HintSource) -> AppResult<ResolvedLocation> {
        let hint = match source {
            HintSource::Hint(hint) => hint,
            HintSource::Device => {
                LocationHint::Coordinates(self.device_locator.current_position().await?)
            }
        };
        resolve_hint(self.geocoder.as_ref(), &hint).await
    }

    async fn bounded<T, F>(&self, future: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match tokio::time::timeout(self.settings.request_timeout, future).await {
            Ok(result) => result,
            Err(_) => Err(NetworkFailure::Timeout.into()),
        }
    }

    /// Moves the cycle's own machine; only the latest cycle is published
    fn enter(
        &self,
        ticket: &CycleTicket,
        machine: &mut CycleStateMachine,
        next: CycleState,
    ) -> AppResult<()> {
        machine.transition(next)?;
        if self.flight.is_current(ticket) {
            log::debug!("Search: cycle {} -> {}", ticket.id(), next);
            self.state_tx.send_replace(next);
        }
        Ok(())
    }

    async fn fail(
        &self,
        ticket: &CycleTicket,
        mut machine: CycleStateMachine,
        category: Category,
        outcome: SearchOutcome,
    ) -> AppResult<CycleReport> {
        self.enter(ticket, &mut machine, CycleState::Failed)?;
        {
            let mut sink = self.sink.lock().await;
            if !self.flight.is_current(ticket) {
                return Ok(self.superseded(ticket));
            }
            Self::write_outcome(&mut *sink, None, category, &outcome);
        }
        self.enter(ticket, &mut machine, CycleState::Idle)?;
        self.flight.finish(ticket);

        LogContext::search_cycle(ticket.id(), category.plural(), outcome.label(), None);
        if let SearchOutcome::NetworkFailure(failure) = &outcome {
            log::warn!("Search: cycle {} failed: {}", ticket.id(), failure);
        }

        Ok(CycleReport::Completed {
            cycle: ticket.id(),
            outcome,
            path: machine.into_path(),
        })
    }

    fn superseded(&self, ticket: &CycleTicket) -> CycleReport {
        LogContext::stale_cycle(ticket.id(), self.flight.latest());
        CycleReport::Superseded { cycle: ticket.id() }
    }

    /// Every outcome starts from a cleared sink
    fn write_outcome(
        sink: &mut S,
        center: Option<&ResolvedLocation>,
        category: Category,
        outcome: &SearchOutcome,
    ) {
        sink.clear();
        if let SearchOutcome::Success(results) = outcome {
            if let Some(center) = center {
                sink.set_map_center(center.coordinate());
            }
            for result in results {
                match result {
                    SearchResult::Place(place) => {
                        sink.render_place(place);
                        if let Some(position) = place.coordinate {
                            sink.add_marker(position, &place.name, MarkerPopup::for_place(place));
                        }
                    }
                    SearchResult::Event(event) => sink.render_event(event),
                }
            }
        }
        if let Some(message) = messages::for_outcome(category, outcome) {
            sink.show_message(message);
        }
    }
}
