//! Builder API for closure-backed states.
//!
//! Implementing [`State`](crate::core::State) on a dedicated type is the
//! usual route for anything non-trivial. For short, one-off activities a
//! [`StateBuilder`] assembles the hooks from closures over a context value
//! instead.

pub mod error;
pub mod state;

pub use error::BuildError;
pub use state::{FnState, StateBuilder};

use crate::core::HookResult;

/// A state that does nothing but wait until `ready` returns true.
///
/// # Example
///
/// ```
/// use staque::builder::wait_until;
/// use staque::core::State;
/// use std::time::Instant;
///
/// let started = Instant::now();
/// let wait = wait_until("Settle", started, |t| t.elapsed().as_secs() >= 1);
/// assert_eq!(wait.name(), "Settle");
/// ```
pub fn wait_until<C, F>(name: &str, context: C, ready: F) -> FnState<C>
where
    F: Fn(&C) -> bool + 'static,
{
    StateBuilder::new(context)
        .name(name)
        .exit_when(ready)
        .build()
        .expect("name and exit condition are always set")
}

/// A state that runs `step` on each maintain tick and is done once `ticks`
/// of them have completed.
///
/// # Example
///
/// ```
/// use staque::builder::repeat;
/// use staque::StateQueue;
///
/// let mut queue = StateQueue::new();
/// queue.append(repeat("Blink", 2, || Ok(())));
///
/// queue.on_loop().unwrap();
/// queue.on_loop().unwrap();
/// queue.on_loop().unwrap();
/// assert!(queue.current_state().is_idle());
/// ```
pub fn repeat<F>(name: &str, ticks: u32, mut step: F) -> FnState<u32>
where
    F: FnMut() -> HookResult + 'static,
{
    StateBuilder::new(0u32)
        .name(name)
        .on_maintain(move |done| {
            step()?;
            *done += 1;
            Ok(())
        })
        .exit_when(move |done| *done >= ticks)
        .build()
        .expect("name and exit condition are always set")
}
