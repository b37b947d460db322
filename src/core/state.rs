//! Core State trait describing a queued activity's lifecycle hooks.
//!
//! A state is a unit of work with explicit setup (`enter`), a repeatable step
//! (`maintain`), two mutually exclusive teardowns (`exit` and `abort`), and a
//! predicate (`exit_condition`) that tells the scheduler when it is done.
//! Implementors only write the hook bodies. Ordering and the at-most-once
//! guarantees are enforced by [`QueuedState`](crate::core::QueuedState).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type returned by a failing hook body.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of running a single hook.
pub type HookResult = Result<(), HookError>;

/// Trait for states driven by a [`StateQueue`](crate::queue::StateQueue).
///
/// Hooks are never called directly by the scheduler. Each one is invoked
/// through a wrapper that records the matching lifecycle flag, so a state
/// sees at most one `enter`, then any number of `maintain` calls, then
/// exactly one of `exit` or `abort`.
///
/// # Example
///
/// ```rust
/// use staque::core::{HookResult, State};
///
/// struct Blink {
///     toggles: u32,
/// }
///
/// impl State for Blink {
///     fn name(&self) -> &str {
///         "Blink"
///     }
///
///     fn enter(&mut self) -> HookResult {
///         self.toggles = 0;
///         Ok(())
///     }
///
///     fn maintain(&mut self) -> HookResult {
///         self.toggles += 1;
///         Ok(())
///     }
///
///     fn exit(&mut self) -> HookResult {
///         Ok(())
///     }
///
///     fn abort(&mut self) -> HookResult {
///         Ok(())
///     }
///
///     fn exit_condition(&self) -> bool {
///         self.toggles >= 4
///     }
/// }
///
/// let blink = Blink { toggles: 0 };
/// assert!(!blink.exit_condition());
/// ```
pub trait State {
    /// Name used in logs, history and errors.
    ///
    /// Default implementation returns the implementing type's path.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// One-time setup. Runs before any `maintain` call.
    fn enter(&mut self) -> HookResult;

    /// Repeatable step, run once per poll while current and not paused.
    fn maintain(&mut self) -> HookResult;

    /// Clean teardown on the normal completion path.
    fn exit(&mut self) -> HookResult;

    /// Unclean teardown on the forced termination path.
    ///
    /// `exit` will not run afterwards, so anything safety critical that
    /// `exit` would have done must happen here as well.
    fn abort(&mut self) -> HookResult;

    /// Whether the state is done and the queue should move on.
    ///
    /// Queried on every poll, including before `enter` has run, so it must
    /// be side-effect free.
    fn exit_condition(&self) -> bool;
}

/// Identifies which lifecycle hook an event or error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    Enter,
    Maintain,
    Exit,
    Abort,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enter => "enter",
            Self::Maintain => "maintain",
            Self::Exit => "exit",
            Self::Abort => "abort",
        };
        f.write_str(name)
    }
}
