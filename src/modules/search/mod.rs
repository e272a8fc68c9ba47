pub mod cycle_state;
pub mod messages;
pub mod orchestrator;
pub mod single_flight;
pub mod trigger;

pub use cycle_state::{CycleState, CycleStateMachine};
pub use orchestrator::{CycleReport, SearchOrchestrator, SearchSettings};
pub use single_flight::{CycleTicket, SingleFlight};
pub use trigger::Trigger;
