//! Lifecycle flags and the wrapper that is their only mutator.
//!
//! [`QueuedState`] owns a boxed [`State`] together with its [`Lifecycle`].
//! The scheduler drives states exclusively through the wrapped operations
//! defined here, which is what guarantees each raw hook fires at most once
//! and in the right slot.

use super::state::{HookResult, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Queue-unique identifier handed out by [`StateQueue::append`](crate::queue::StateQueue::append).
///
/// Ids increase monotonically in append order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(pub(crate) u64);

impl StateId {
    /// The raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status flags of a single state.
///
/// `started` and `ended` each flip from false to true at most once.
/// `aborted` implies `ended`. `paused` may toggle freely and only gates
/// whether `maintain` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    started: bool,
    ended: bool,
    aborted: bool,
    paused: bool,
}

impl Lifecycle {
    pub(crate) const fn idle() -> Self {
        Self {
            started: true,
            ended: false,
            aborted: false,
            paused: false,
        }
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn has_aborted(&self) -> bool {
        self.aborted
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Started and not yet ended.
    pub fn is_active(&self) -> bool {
        self.started && !self.ended
    }

    fn mark_started(&mut self) {
        self.started = true;
    }

    fn mark_exited(&mut self) {
        self.ended = true;
    }

    fn mark_aborted(&mut self) {
        self.aborted = true;
        self.ended = true;
    }
}

/// A state owned by a queue, paired with its lifecycle flags.
///
/// Flags are exposed read-only. The transition operations are crate-private
/// so nothing outside the scheduler can run a hook out of order. Every
/// wrapped operation records its flag whether or not the hook succeeded,
/// so the flags always reflect which hooks have been invoked.
pub struct QueuedState {
    id: StateId,
    state: Box<dyn State>,
    lifecycle: Lifecycle,
}

impl QueuedState {
    pub(crate) fn new(id: StateId, state: Box<dyn State>) -> Self {
        Self {
            id,
            state,
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Read-only access to the wrapped state.
    pub fn state(&self) -> &dyn State {
        self.state.as_ref()
    }

    /// Copy of the current flags.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn has_started(&self) -> bool {
        self.lifecycle.has_started()
    }

    pub fn has_ended(&self) -> bool {
        self.lifecycle.has_ended()
    }

    pub fn has_aborted(&self) -> bool {
        self.lifecycle.has_aborted()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle.is_paused()
    }

    /// Stop `maintain` from running. Does not touch the wrapped state.
    pub fn pause(&mut self) {
        self.lifecycle.paused = true;
    }

    pub fn unpause(&mut self) {
        self.lifecycle.paused = false;
    }

    /// Flip the pause flag. No catch-up `maintain` is issued on unpause.
    pub fn toggle_pause(&mut self) {
        self.lifecycle.paused = !self.lifecycle.paused;
    }

    /// True once ended, or when the wrapped state reports it is done.
    ///
    /// An ended state short-circuits its own predicate.
    pub fn should_advance(&self) -> bool {
        self.lifecycle.has_ended() || self.state.exit_condition()
    }

    /// Run `enter` if it has not run yet, then mark started.
    pub(crate) fn start(&mut self) -> HookResult {
        if self.lifecycle.has_started() {
            return Ok(());
        }
        let result = self.state.enter();
        self.lifecycle.mark_started();
        result
    }

    /// Run `maintain` unless paused.
    pub(crate) fn poll_maintain(&mut self) -> HookResult {
        if !self.lifecycle.is_active() || self.lifecycle.is_paused() {
            return Ok(());
        }
        self.state.maintain()
    }

    /// Run `abort`, then mark aborted and ended. No-op unless active.
    pub(crate) fn force_abort(&mut self) -> HookResult {
        if !self.lifecycle.is_active() {
            return Ok(());
        }
        let result = self.state.abort();
        self.lifecycle.mark_aborted();
        result
    }

    /// Run `exit`, then mark ended. No-op unless active.
    pub(crate) fn normal_exit(&mut self) -> HookResult {
        if !self.lifecycle.is_active() {
            return Ok(());
        }
        let result = self.state.exit();
        self.lifecycle.mark_exited();
        result
    }

    /// Mark aborted and ended without running any hook.
    pub(crate) fn discard(&mut self) {
        self.lifecycle.mark_aborted();
    }
}

impl fmt::Debug for QueuedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuedState")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, Probe};

    fn queued(probe: Probe) -> QueuedState {
        QueuedState::new(StateId(0), Box::new(probe))
    }

    #[test]
    fn new_lifecycle_is_all_false() {
        let lifecycle = Lifecycle::default();
        assert!(!lifecycle.has_started());
        assert!(!lifecycle.has_ended());
        assert!(!lifecycle.has_aborted());
        assert!(!lifecycle.is_paused());
        assert!(!lifecycle.is_active());
    }

    #[test]
    fn start_runs_enter_once() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);

        state.start().unwrap();
        state.start().unwrap();

        assert!(state.has_started());
        assert!(state.is_active());
        assert_eq!(log.calls(), vec![Call::Enter("A")]);
    }

    #[test]
    fn maintain_is_skipped_before_start_and_after_end() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);

        state.poll_maintain().unwrap();
        state.start().unwrap();
        state.poll_maintain().unwrap();
        state.normal_exit().unwrap();
        state.poll_maintain().unwrap();

        assert_eq!(
            log.calls(),
            vec![Call::Enter("A"), Call::Maintain("A"), Call::Exit("A")]
        );
    }

    #[test]
    fn pause_gates_maintain_only() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);
        state.start().unwrap();

        state.pause();
        state.poll_maintain().unwrap();
        assert!(state.is_paused());
        assert!(state.is_active());

        state.toggle_pause();
        assert!(!state.is_paused());
        state.poll_maintain().unwrap();

        state.toggle_pause();
        state.unpause();
        assert!(!state.is_paused());

        assert_eq!(log.calls(), vec![Call::Enter("A"), Call::Maintain("A")]);
    }

    #[test]
    fn exit_and_abort_are_mutually_exclusive() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);
        state.start().unwrap();

        state.normal_exit().unwrap();
        state.force_abort().unwrap();
        state.normal_exit().unwrap();

        assert!(state.has_ended());
        assert!(!state.has_aborted());
        assert_eq!(log.calls(), vec![Call::Enter("A"), Call::Exit("A")]);
    }

    #[test]
    fn abort_marks_aborted_and_ended() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);
        state.start().unwrap();

        state.force_abort().unwrap();
        state.force_abort().unwrap();

        assert!(state.has_ended());
        assert!(state.has_aborted());
        assert!(!state.is_active());
        assert_eq!(log.calls(), vec![Call::Enter("A"), Call::Abort("A")]);
    }

    #[test]
    fn abort_before_start_is_noop() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);

        state.force_abort().unwrap();

        assert!(!state.has_ended());
        assert!(log.calls().is_empty());
    }

    #[test]
    fn should_advance_short_circuits_when_ended() {
        let (probe, _log) = Probe::new("A");
        let mut state = queued(probe);
        assert!(!state.should_advance());

        state.start().unwrap();
        state.force_abort().unwrap();
        assert!(state.should_advance());
    }

    #[test]
    fn should_advance_follows_exit_condition() {
        let (probe, _log) = Probe::new("A");
        let mut state = queued(probe.done_after(1));
        state.start().unwrap();
        assert!(!state.should_advance());
        state.poll_maintain().unwrap();
        assert!(state.should_advance());
    }

    #[test]
    fn flags_are_set_even_when_hook_fails() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe.failing(crate::core::Hook::Enter));

        assert!(state.start().is_err());
        assert!(state.has_started());
        assert!(state.is_active());
        assert_eq!(log.calls(), vec![Call::Enter("A")]);
    }

    #[test]
    fn discard_skips_hooks() {
        let (probe, log) = Probe::new("A");
        let mut state = queued(probe);
        state.start().unwrap();

        state.discard();

        assert!(state.has_aborted());
        assert!(state.has_ended());
        assert_eq!(log.calls(), vec![Call::Enter("A")]);
    }

    #[test]
    fn lifecycle_serializes_correctly() {
        let (probe, _log) = Probe::new("A");
        let mut state = queued(probe);
        state.start().unwrap();
        state.pause();

        let json = serde_json::to_string(&state.lifecycle()).unwrap();
        let deserialized: Lifecycle = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state.lifecycle());
    }

    #[test]
    fn state_id_displays_with_hash() {
        assert_eq!(StateId(7).to_string(), "#7");
        assert_eq!(StateId(7).get(), 7);
    }
}
