//! Find nearby playgrounds and family events.
//!
//! A trigger (ZIP code, coordinates or the device position) is resolved to a
//! coordinate, a places or events backend is searched, records are
//! normalized and filtered, and the outcome is written to a
//! [`PresentationSink`](modules::presentation::PresentationSink). Only the
//! newest search cycle ever reaches the sink.

pub mod modules;
pub mod shared;

pub use modules::{
    discovery::Category,
    presentation::{ConsoleSink, PresentationSink, RecordingSink},
    search::{CycleReport, SearchOrchestrator, Trigger},
};
pub use shared::{AppConfig, AppError, AppResult};
