//! Poll-driven scheduler over a FIFO queue of states.
//!
//! The queue owns its states and drives the front one through its
//! lifecycle, one [`StateQueue::on_loop`] call per iteration:
//!
//! 1. If the current state is done, exit it and start the next one
//! 2. Issue exactly one `maintain` to whatever is current now
//!
//! There is no internal thread or timer. Cancellation is synchronous via
//! [`StateQueue::abort_one`] and [`StateQueue::abort_all`].

mod builder;
mod current;
mod error;
mod scheduler;
mod snapshot;

pub use builder::StateQueueBuilder;
pub use current::{Current, CurrentMut};
pub use error::{HookFailurePolicy, QueueError};
pub use scheduler::StateQueue;
pub use snapshot::{QueueSnapshot, StateSnapshot};
