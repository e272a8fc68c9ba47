use serde::Serialize;
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Where a search cycle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleState {
    Idle,
    Resolving,
    Searching,
    Rendering,
    Failed,
}

impl CycleState {
    pub fn can_transition_to(self, next: CycleState) -> bool {
        use CycleState::*;
        matches!(
            (self, next),
            (Idle, Resolving)
                | (Resolving, Searching)
                | (Searching, Rendering)
                | (Rendering, Idle)
                | (Resolving, Failed)
                | (Searching, Failed)
                | (Failed, Idle)
        )
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CycleState::Idle => "idle",
            CycleState::Resolving => "resolving",
            CycleState::Searching => "searching",
            CycleState::Rendering => "rendering",
            CycleState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// State of one cycle plus the path it took
#[derive(Debug, Clone)]
pub struct CycleStateMachine {
    state: CycleState,
    path: Vec<CycleState>,
}

impl Default for CycleStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleStateMachine {
    pub fn new() -> Self {
        Self {
            state: CycleState::Idle,
            path: vec![CycleState::Idle],
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn path(&self) -> &[CycleState] {
        &self.path
    }

    pub fn into_path(self) -> Vec<CycleState> {
        self.path
    }

    pub fn transition(&mut self, next: CycleState) -> AppResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(AppError::InternalError(format!(
                "Illegal cycle transition: {} -> {}",
                self.state, next
            )));
        }
        self.state = next;
        self.path.push(next);
        Ok(())
    }
}
