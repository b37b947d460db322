//! Core lifecycle types.
//!
//! This module contains the per-state half of the runner:
//! - The `State` trait users implement
//! - `Lifecycle` flags and the `QueuedState` wrapper that mutates them
//! - The shared `IdleState` fallback
//! - A bounded journal of lifecycle events
//!
//! Nothing in here knows about queues; the scheduler in [`crate::queue`]
//! composes these pieces.

mod history;
mod idle;
mod lifecycle;
mod state;

pub use history::{EventKind, LifecycleEvent, LifecycleHistory, DEFAULT_HISTORY_LIMIT};
pub use idle::{idle, IdleState};
pub use lifecycle::{Lifecycle, QueuedState, StateId};
pub use state::{Hook, HookError, HookResult, State};
