//! Staque: a cooperative, poll-driven state queue
//!
//! Staque runs one "current activity" at a time out of a FIFO queue. Each
//! activity is a [`State`] with explicit lifecycle hooks, and the queue
//! guarantees those hooks are only ever called in order: `enter` once, then
//! `maintain` once per poll, then exactly one of `exit` or `abort`.
//!
//! There is no thread, timer or event loop inside. The embedding
//! application (a robot control loop, a game tick) calls
//! [`StateQueue::on_loop`] once per iteration and all progress happens
//! synchronously inside that call.
//!
//! # Core Concepts
//!
//! - **State**: user-implemented lifecycle hooks via the `State` trait
//! - **Lifecycle**: read-only started/ended/aborted/paused flags
//! - **StateQueue**: the FIFO scheduler, with a shared idle fallback
//! - **History**: bounded journal of lifecycle events
//!
//! # Example
//!
//! ```rust
//! use staque::{HookResult, State, StateQueue};
//!
//! struct Drive {
//!     meters: u32,
//!     target: u32,
//! }
//!
//! impl State for Drive {
//!     fn name(&self) -> &str {
//!         "Drive"
//!     }
//!
//!     fn enter(&mut self) -> HookResult {
//!         Ok(())
//!     }
//!
//!     fn maintain(&mut self) -> HookResult {
//!         self.meters += 1;
//!         Ok(())
//!     }
//!
//!     fn exit(&mut self) -> HookResult {
//!         Ok(())
//!     }
//!
//!     fn abort(&mut self) -> HookResult {
//!         Ok(())
//!     }
//!
//!     fn exit_condition(&self) -> bool {
//!         self.meters >= self.target
//!     }
//! }
//!
//! let mut queue = StateQueue::new();
//! queue.append(Drive { meters: 0, target: 2 });
//! queue.append_with(|| Drive { meters: 0, target: 1 });
//!
//! queue.on_loop().unwrap(); // enter first Drive, maintain
//! queue.on_loop().unwrap(); // maintain
//! queue.on_loop().unwrap(); // exit first, enter second, maintain
//! queue.on_loop().unwrap(); // exit second
//!
//! assert!(queue.current_state().is_idle());
//! assert_eq!(queue.history().entered_path(), vec!["Drive", "Drive"]);
//! ```

pub mod builder;
pub mod core;
pub mod queue;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use self::builder::{FnState, StateBuilder};
pub use self::core::{HookResult, Lifecycle, State, StateId};
pub use self::queue::{HookFailurePolicy, QueueError, StateQueue};
