//! The shared "nothing to do" fallback state.

use super::lifecycle::Lifecycle;
use super::state::{HookResult, State};

static IDLE: IdleState = IdleState { _private: () };

/// Fallback reported by an empty queue.
///
/// The idle state is always started, never ends and is never aborted. Its
/// hooks are no-ops and its exit condition is always false, so the
/// scheduler never advances past it. There is a single shared instance,
/// obtained through [`idle`].
#[derive(Debug)]
pub struct IdleState {
    _private: (),
}

/// The process-wide idle instance.
pub fn idle() -> &'static IdleState {
    &IDLE
}

impl IdleState {
    /// Fixed flags: started, never ended, never aborted, never paused.
    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::idle()
    }
}

impl State for IdleState {
    fn name(&self) -> &str {
        "Idle"
    }

    fn enter(&mut self) -> HookResult {
        Ok(())
    }

    fn maintain(&mut self) -> HookResult {
        Ok(())
    }

    fn exit(&mut self) -> HookResult {
        Ok(())
    }

    fn abort(&mut self) -> HookResult {
        Ok(())
    }

    fn exit_condition(&self) -> bool {
        false
    }
}
