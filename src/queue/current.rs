//! Views of the queue's current state.
//!
//! The current state is the front of the queue or, when the queue is empty,
//! the shared idle state. Both views answer the same status queries so
//! callers rarely need to match on the variant.

use crate::core::{IdleState, Lifecycle, QueuedState, State, StateId};

/// Read-only view of the current state.
#[derive(Debug, Clone, Copy)]
pub enum Current<'a> {
    /// The queue is empty
    Idle(&'static IdleState),
    /// Front of the queue
    Queued(&'a QueuedState),
}

impl<'a> Current<'a> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle(_))
    }

    /// Id of the front state, `None` when idle.
    pub fn id(&self) -> Option<StateId> {
        match self {
            Self::Idle(_) => None,
            Self::Queued(state) => Some(state.id()),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Idle(idle) => idle.name(),
            Self::Queued(state) => state.name(),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            Self::Idle(idle) => idle.lifecycle(),
            Self::Queued(state) => state.lifecycle(),
        }
    }

    pub fn has_started(&self) -> bool {
        self.lifecycle().has_started()
    }

    pub fn has_ended(&self) -> bool {
        self.lifecycle().has_ended()
    }

    pub fn has_aborted(&self) -> bool {
        self.lifecycle().has_aborted()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle().is_active()
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle().is_paused()
    }

    /// Whether the queue would advance past this state on the next poll.
    pub fn should_advance(&self) -> bool {
        match self {
            Self::Idle(idle) => idle.lifecycle().has_ended() || idle.exit_condition(),
            Self::Queued(state) => state.should_advance(),
        }
    }
}

/// Mutable view of the current state, for pause controls.
///
/// Pausing the idle state is accepted and has no effect.
#[derive(Debug)]
pub enum CurrentMut<'a> {
    Idle(&'static IdleState),
    Queued(&'a mut QueuedState),
}

impl CurrentMut<'_> {
    pub fn pause(&mut self) {
        if let Self::Queued(state) = self {
            state.pause();
        }
    }

    pub fn unpause(&mut self) {
        if let Self::Queued(state) = self {
            state.unpause();
        }
    }

    pub fn toggle_pause(&mut self) {
        if let Self::Queued(state) = self {
            state.toggle_pause();
        }
    }

    /// Reborrow as a read-only view.
    pub fn as_current(&self) -> Current<'_> {
        match self {
            Self::Idle(idle) => Current::Idle(*idle),
            Self::Queued(state) => Current::Queued(&**state),
        }
    }
}
