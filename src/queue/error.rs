//! Queue error types.

use crate::core::{Hook, HookError, StateId};
use thiserror::Error;

/// Errors surfaced by queue operations when a hook body fails.
///
/// By the time one of these is returned the queue has already applied its
/// [`HookFailurePolicy`](crate::queue::HookFailurePolicy), so the failed
/// state's flags are final and it is no longer current.
#[derive(Debug, Error)]
pub enum QueueError {
    /// `enter`, `maintain` or `exit` returned an error
    #[error("state '{state}' ({id}) failed in {hook}: {source}")]
    HookFailed {
        state: String,
        id: StateId,
        hook: Hook,
        #[source]
        source: HookError,
    },

    /// `abort` returned an error during a forced abort
    #[error("state '{state}' ({id}) failed to abort cleanly: {source}")]
    AbortFailed {
        state: String,
        id: StateId,
        #[source]
        source: HookError,
    },
}

impl QueueError {
    pub(crate) fn new(state: &str, id: StateId, hook: Hook, source: HookError) -> Self {
        match hook {
            Hook::Abort => Self::AbortFailed {
                state: state.to_string(),
                id,
                source,
            },
            hook => Self::HookFailed {
                state: state.to_string(),
                id,
                hook,
                source,
            },
        }
    }

    /// Id of the state whose hook failed.
    pub fn state_id(&self) -> StateId {
        match self {
            Self::HookFailed { id, .. } | Self::AbortFailed { id, .. } => *id,
        }
    }

    /// The hook that failed.
    pub fn hook(&self) -> Hook {
        match self {
            Self::HookFailed { hook, .. } => *hook,
            Self::AbortFailed { .. } => Hook::Abort,
        }
    }
}

/// How the queue reacts when a hook body returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HookFailurePolicy {
    /// Run `abort` for cleanup (if the state is still active), pop the
    /// state and return the error
    #[default]
    Abort,

    /// Mark the state aborted without running `abort`, pop it and return
    /// the error
    Discard,

    /// Log a warning and carry on as if the hook had succeeded
    IgnoreAndLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn abort_hook_maps_to_abort_failed() {
        let err = QueueError::new("Arm", StateId(2), Hook::Abort, "stuck".into());
        assert!(matches!(err, QueueError::AbortFailed { .. }));
        assert_eq!(err.hook(), Hook::Abort);
        assert_eq!(err.state_id(), StateId(2));
        assert_eq!(
            err.to_string(),
            "state 'Arm' (#2) failed to abort cleanly: stuck"
        );
    }

    #[test]
    fn other_hooks_map_to_hook_failed() {
        let err = QueueError::new("Arm", StateId(0), Hook::Maintain, "jammed".into());
        assert_eq!(err.hook(), Hook::Maintain);
        assert_eq!(err.to_string(), "state 'Arm' (#0) failed in maintain: jammed");
    }

    #[test]
    fn source_is_preserved() {
        let err = QueueError::new("Arm", StateId(0), Hook::Enter, "no power".into());
        assert_eq!(err.source().unwrap().to_string(), "no power");
    }

    #[test]
    fn default_policy_is_abort() {
        assert_eq!(HookFailurePolicy::default(), HookFailurePolicy::Abort);
    }
}
