//! Serializable point-in-time view of a queue, for diagnostics.

use crate::core::{Lifecycle, QueuedState, StateId};
use serde::{Deserialize, Serialize};

/// Id, name and flags of one queued state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub id: StateId,
    pub name: String,
    pub lifecycle: Lifecycle,
}

impl From<&QueuedState> for StateSnapshot {
    fn from(state: &QueuedState) -> Self {
        Self {
            id: state.id(),
            name: state.name().to_string(),
            lifecycle: state.lifecycle(),
        }
    }
}

/// Every queued state, front first. Empty means the queue is idle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub states: Vec<StateSnapshot>,
}

impl QueueSnapshot {
    pub fn is_idle(&self) -> bool {
        self.states.is_empty()
    }

    pub fn current(&self) -> Option<&StateSnapshot> {
        self.states.first()
    }
}
