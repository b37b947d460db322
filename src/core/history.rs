//! Lifecycle event journal.
//!
//! Records the order in which queued states were appended, entered, exited,
//! aborted or discarded. The journal is bounded: once the limit is reached
//! the oldest events are evicted.

use super::lifecycle::StateId;
use super::state::Hook;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of events a queue keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// What happened to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Added to the back of the queue
    Appended,
    /// `enter` ran
    Entered,
    /// `exit` ran (normal completion)
    Exited,
    /// `abort` ran, or the state was force-ended by the failure policy
    Aborted,
    /// Removed from the queue without any hook running
    Discarded,
    /// A hook body returned an error
    HookFailed(Hook),
}

/// Record of a single lifecycle event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// The state the event belongs to
    pub id: StateId,
    /// The state's name at the time of the event
    pub state: String,
    pub kind: EventKind,
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered journal of lifecycle events.
///
/// # Example
///
/// ```rust
/// use staque::{StateBuilder, StateQueue};
/// use staque::core::EventKind;
///
/// let mut queue = StateQueue::new();
/// queue.append(
///     StateBuilder::new(())
///         .name("Home")
///         .exit_when(|_| true)
///         .build()
///         .unwrap(),
/// );
///
/// queue.on_loop().unwrap();
/// queue.on_loop().unwrap();
///
/// let kinds: Vec<EventKind> = queue.history().events().map(|e| e.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![EventKind::Appended, EventKind::Entered, EventKind::Exited]
/// );
/// assert_eq!(queue.history().entered_path(), vec!["Home"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifecycleHistory {
    events: VecDeque<LifecycleEvent>,
    limit: usize,
}

impl Default for LifecycleHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl LifecycleHistory {
    /// Create an empty journal holding at most `limit` events.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    pub(crate) fn record(&mut self, id: StateId, state: &str, kind: EventKind) {
        if !self.is_enabled() {
            return;
        }
        while self.events.len() >= self.limit {
            self.events.pop_front();
        }
        self.events.push_back(LifecycleEvent {
            id,
            state: state.to_string(),
            kind,
            timestamp: Utc::now(),
        });
    }

    /// Events in the order they were recorded, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events belonging to one state.
    pub fn for_state(&self, id: StateId) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter().filter(move |event| event.id == id)
    }

    /// Names of states in the order they were entered.
    pub fn entered_path(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.kind == EventKind::Entered)
            .map(|event| event.state.as_str())
            .collect()
    }

    /// Time between the first and last retained events.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.events.front()?, self.events.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
