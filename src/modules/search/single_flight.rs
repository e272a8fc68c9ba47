use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

/// Identity of one search cycle
#[derive(Debug, Clone)]
pub struct CycleTicket {
    id: u64,
    token: CancellationToken,
}

impl CycleTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Await `future` unless this cycle gets superseded first.
    /// `None` means the result must be dropped.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = future => Some(output),
        }
    }
}

#[derive(Debug, Default)]
struct FlightState {
    latest: u64,
    active: Option<CancellationToken>,
}

/// Issues cycle tickets; starting a cycle cancels the one before it.
///
/// Ticket ids increase monotonically. Only the ticket with the latest id may
/// write to the presentation sink.
#[derive(Debug, Default)]
pub struct SingleFlight {
    state: Mutex<FlightState>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    // Critical sections never panic, so a poisoned lock still holds valid data
    fn lock(&self) -> MutexGuard<'_, FlightState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin(&self) -> CycleTicket {
        let mut state = self.lock();
        if let Some(previous) = state.active.take() {
            previous.cancel();
        }
        state.latest += 1;
        let token = CancellationToken::new();
        state.active = Some(token.clone());
        CycleTicket {
            id: state.latest,
            token,
        }
    }

    pub fn is_current(&self, ticket: &CycleTicket) -> bool {
        self.lock().latest == ticket.id
    }

    pub fn latest(&self) -> u64 {
        self.lock().latest
    }

    /// Release the ticket once its cycle has reached a terminal outcome
    pub fn finish(&self, ticket: &CycleTicket) {
        let mut state = self.lock();
        if state.latest == ticket.id {
            state.active = None;
        }
    }
}
