//! FIFO scheduler that drives queued states through their lifecycle.

use super::builder::StateQueueBuilder;
use super::current::{Current, CurrentMut};
use super::error::{HookFailurePolicy, QueueError};
use super::snapshot::{QueueSnapshot, StateSnapshot};
use crate::core::{
    idle, EventKind, Hook, HookError, LifecycleHistory, QueuedState, State, StateId,
};
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

/// Ordered queue of states with a shared idle fallback.
///
/// Only the front state ever receives lifecycle calls. Everything behind it
/// stays dormant (never started) until it reaches the front. All progress
/// happens inside calls made by the driver, typically one [`on_loop`] per
/// iteration of an outer control loop.
///
/// [`on_loop`]: StateQueue::on_loop
///
/// # Example
///
/// ```rust
/// use staque::{StateBuilder, StateQueue};
///
/// let mut queue = StateQueue::new();
/// queue.append(
///     StateBuilder::new(0u32)
///         .name("Spin")
///         .on_maintain(|turns| {
///             *turns += 1;
///             Ok(())
///         })
///         .exit_when(|turns| *turns >= 3)
///         .build()
///         .unwrap(),
/// );
///
/// for _ in 0..3 {
///     queue.on_loop().unwrap();
/// }
/// assert_eq!(queue.current_state().name(), "Spin");
///
/// queue.on_loop().unwrap();
/// assert!(queue.current_state().is_idle());
/// ```
#[derive(Debug)]
pub struct StateQueue {
    queue: VecDeque<QueuedState>,
    next_id: u64,
    failure_policy: HookFailurePolicy,
    history: LifecycleHistory,
}

impl Default for StateQueue {
    fn default() -> Self {
        StateQueueBuilder::new().build()
    }
}

impl StateQueue {
    /// Create an empty queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> StateQueueBuilder {
        StateQueueBuilder::new()
    }

    pub(crate) fn with_config(failure_policy: HookFailurePolicy, history_limit: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 0,
            failure_policy,
            history: LifecycleHistory::with_limit(history_limit),
        }
    }

    /// Whether there is an explicit state in the queue.
    pub fn has_state_available(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The front state, or the shared idle state when the queue is empty.
    pub fn current_state(&self) -> Current<'_> {
        match self.queue.front() {
            Some(state) => Current::Queued(state),
            None => Current::Idle(idle()),
        }
    }

    /// Mutable view of the current state, for pause controls.
    pub fn current_state_mut(&mut self) -> CurrentMut<'_> {
        match self.queue.front_mut() {
            Some(state) => CurrentMut::Queued(state),
            None => CurrentMut::Idle(idle()),
        }
    }

    /// Queued states, front first.
    pub fn states(&self) -> impl Iterator<Item = &QueuedState> {
        self.queue.iter()
    }

    /// Look up a queued state, e.g. to pause it before it becomes current.
    pub fn state_mut(&mut self, id: StateId) -> Option<&mut QueuedState> {
        self.queue.iter_mut().find(|state| state.id() == id)
    }

    pub fn history(&self) -> &LifecycleHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn failure_policy(&self) -> HookFailurePolicy {
        self.failure_policy
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            states: self.queue.iter().map(StateSnapshot::from).collect(),
        }
    }

    /// Add a state to the back of the queue.
    ///
    /// The current state is unaffected; an empty queue picks the new state
    /// up on the next poll.
    pub fn append<S>(&mut self, state: S) -> StateId
    where
        S: State + 'static,
    {
        self.append_boxed(Box::new(state))
    }

    /// Build a state now and add it to the back of the queue.
    pub fn append_with<S, F>(&mut self, factory: F) -> StateId
    where
        S: State + 'static,
        F: FnOnce() -> S,
    {
        self.append(factory())
    }

    pub fn append_boxed(&mut self, state: Box<dyn State>) -> StateId {
        let id = StateId(self.next_id);
        self.next_id += 1;

        let state = QueuedState::new(id, state);
        debug!(state = state.name(), %id, "appended state");
        self.history.record(id, state.name(), EventKind::Appended);
        self.queue.push_back(state);
        id
    }

    /// Remove the front state without running any hook.
    fn pop(&mut self) -> Option<QueuedState> {
        self.queue.pop_front()
    }

    /// Abort the current state if it is active, then remove it.
    ///
    /// A front state that never started is removed without any hook
    /// running. On an empty queue this does nothing.
    pub fn abort_one(&mut self) -> Result<(), QueueError> {
        let Some(current) = self.queue.front_mut() else {
            return Ok(());
        };
        let (id, name) = (current.id(), current.name().to_string());

        let result = if current.is_active() {
            info!(state = %name, %id, "aborting state");
            let result = current.force_abort();
            self.history.record(id, &name, EventKind::Aborted);
            result
        } else {
            debug!(state = %name, %id, "discarding state that never started");
            self.history.record(id, &name, EventKind::Discarded);
            Ok(())
        };

        self.pop();
        result.or_else(|source| self.fail(id, &name, Hook::Abort, source))
    }

    /// Abort the current state, then discard everything queued behind it.
    ///
    /// Discarded states receive no hook calls. The queue is empty afterwards
    /// even if the abort hook failed.
    pub fn abort_all(&mut self) -> Result<(), QueueError> {
        let result = self.abort_one();
        for state in self.queue.drain(..) {
            debug!(state = state.name(), id = %state.id(), "discarding queued state");
            self.history
                .record(state.id(), state.name(), EventKind::Discarded);
        }
        result
    }

    /// Start the current state if it has not started yet. Idempotent.
    pub fn start_state(&mut self) -> Result<(), QueueError> {
        let Some(current) = self.queue.front_mut() else {
            return Ok(());
        };
        if current.has_started() {
            return Ok(());
        }
        let (id, name) = (current.id(), current.name().to_string());

        debug!(state = %name, %id, "entering state");
        let result = current.start();
        self.history.record(id, &name, EventKind::Entered);
        result.or_else(|source| self.recover(id, &name, Hook::Enter, source))
    }

    /// Exit the current state normally and remove it, if it is active.
    pub fn end_state(&mut self) -> Result<(), QueueError> {
        let Some(current) = self.queue.front_mut() else {
            return Ok(());
        };
        if !current.is_active() {
            return Ok(());
        }
        let (id, name) = (current.id(), current.name().to_string());

        debug!(state = %name, %id, "exiting state");
        let result = current.normal_exit();
        self.history.record(id, &name, EventKind::Exited);
        self.pop();
        result.or_else(|source| self.fail(id, &name, Hook::Exit, source))
    }

    /// End the current state if it is active, then start whatever is next.
    ///
    /// On a queue where nothing has run yet this just starts the front.
    pub fn next(&mut self) -> Result<(), QueueError> {
        if self.current_state().is_active() {
            self.end_state()?;
        }
        self.start_state()
    }

    /// Run one iteration: advance if the current state is done, then issue
    /// exactly one `maintain` to whatever is current afterwards.
    ///
    /// A front state that has not started yet is started before it is
    /// maintained, so a newly current state gets its first tick in the same
    /// call. If a hook fails the error is returned right away and no
    /// `maintain` runs in this call.
    pub fn on_loop(&mut self) -> Result<(), QueueError> {
        if self.current_state().should_advance() {
            self.next()?;
        } else {
            self.start_state()?;
        }
        self.maintain_current()
    }

    fn maintain_current(&mut self) -> Result<(), QueueError> {
        let Some(current) = self.queue.front_mut() else {
            return Ok(());
        };
        match current.poll_maintain() {
            Ok(()) => Ok(()),
            Err(source) => {
                let (id, name) = (current.id(), current.name().to_string());
                self.recover(id, &name, Hook::Maintain, source)
            }
        }
    }

    /// Handle a failed hook on a state that is still at the front.
    fn recover(
        &mut self,
        id: StateId,
        name: &str,
        hook: Hook,
        source: HookError,
    ) -> Result<(), QueueError> {
        self.history.record(id, name, EventKind::HookFailed(hook));
        self.tear_down_failed(id, name, hook);
        self.report(id, name, hook, source)
    }

    /// Handle a failed hook on a state that has already ended.
    fn fail(
        &mut self,
        id: StateId,
        name: &str,
        hook: Hook,
        source: HookError,
    ) -> Result<(), QueueError> {
        self.history.record(id, name, EventKind::HookFailed(hook));
        self.report(id, name, hook, source)
    }

    fn tear_down_failed(&mut self, id: StateId, name: &str, hook: Hook) {
        let Some(current) = self.queue.front_mut().filter(|state| state.id() == id) else {
            return;
        };

        match self.failure_policy {
            HookFailurePolicy::IgnoreAndLog => return,
            HookFailurePolicy::Abort => {
                info!(state = name, %id, %hook, "aborting state after failed hook");
                let result = current.force_abort();
                self.history.record(id, name, EventKind::Aborted);
                if let Err(abort_error) = result {
                    error!(
                        state = name,
                        %id,
                        %hook,
                        error = %abort_error,
                        "abort after failed hook also failed"
                    );
                    self.history
                        .record(id, name, EventKind::HookFailed(Hook::Abort));
                }
            }
            HookFailurePolicy::Discard => {
                info!(state = name, %id, %hook, "discarding state after failed hook");
                current.discard();
                self.history.record(id, name, EventKind::Aborted);
            }
        }
        self.pop();
    }

    fn report(
        &self,
        id: StateId,
        name: &str,
        hook: Hook,
        source: HookError,
    ) -> Result<(), QueueError> {
        match self.failure_policy {
            HookFailurePolicy::IgnoreAndLog => {
                warn!(state = name, %id, %hook, error = %source, "hook failed, continuing");
                Ok(())
            }
            HookFailurePolicy::Abort | HookFailurePolicy::Discard => {
                error!(state = name, %id, %hook, error = %source, "hook failed");
                Err(QueueError::new(name, id, hook, source))
            }
        }
    }
}
