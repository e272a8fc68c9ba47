use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn) // Default level
            .filter_module("playfinder", log::LevelFilter::Info)
            .filter_module("playfinder_lib", log::LevelFilter::Info)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env() // RUST_LOG still wins
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        debug!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log backend calls. `endpoint` must never contain credentials.
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log the end of a search cycle
    pub fn search_cycle(cycle: u64, category: &str, outcome: &str, results: Option<usize>) {
        match results {
            Some(count) => info!(
                "Search: cycle {} ({}) finished with {} ({} results)",
                cycle, category, outcome, count
            ),
            None => info!("Search: cycle {} ({}) finished with {}", cycle, category, outcome),
        }
    }

    /// Log a cycle whose results were dropped because a newer one started
    pub fn stale_cycle(cycle: u64, latest: u64) {
        info!(
            "Search: discarding cycle {} (superseded by cycle {})",
            cycle, latest
        );
    }

    /// Log records skipped while decoding a backend response
    pub fn skipped_record(provider: &str, error: &dyn std::error::Error) {
        warn!("{}: skipping malformed record: {}", provider, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
