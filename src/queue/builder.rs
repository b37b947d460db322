//! Builder for configuring a [`StateQueue`].

use super::error::HookFailurePolicy;
use super::scheduler::StateQueue;
use crate::core::DEFAULT_HISTORY_LIMIT;

/// Builder for constructing queues with a fluent API.
///
/// # Example
///
/// ```rust
/// use staque::queue::{HookFailurePolicy, StateQueueBuilder};
///
/// let queue = StateQueueBuilder::new()
///     .failure_policy(HookFailurePolicy::IgnoreAndLog)
///     .history_limit(32)
///     .build();
///
/// assert_eq!(queue.failure_policy(), HookFailurePolicy::IgnoreAndLog);
/// assert_eq!(queue.history().limit(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct StateQueueBuilder {
    failure_policy: HookFailurePolicy,
    history_limit: usize,
}

impl StateQueueBuilder {
    pub fn new() -> Self {
        Self {
            failure_policy: HookFailurePolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set how hook failures are handled
    pub fn failure_policy(mut self, policy: HookFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the number of lifecycle events retained. Zero disables history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn build(self) -> StateQueue {
        StateQueue::with_config(self.failure_policy, self.history_limit)
    }
}

impl Default for StateQueueBuilder {
    fn default() -> Self {
        Self::new()
    }
}
