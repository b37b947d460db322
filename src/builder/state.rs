//! Builder for states whose hooks are closures over an owned context.

use crate::builder::error::BuildError;
use crate::core::{HookResult, State};
use std::fmt;

type HookFn<C> = Box<dyn FnMut(&mut C) -> HookResult>;
type ExitCondition<C> = Box<dyn Fn(&C) -> bool>;

/// A [`State`] assembled from closures by [`StateBuilder`].
///
/// Each hook receives the state's context. Hooks that were not supplied
/// are no-ops.
pub struct FnState<C> {
    name: String,
    context: C,
    on_enter: Option<HookFn<C>>,
    on_maintain: Option<HookFn<C>>,
    on_exit: Option<HookFn<C>>,
    on_abort: Option<HookFn<C>>,
    exit_when: ExitCondition<C>,
}

impl<C> FnState<C> {
    pub fn context(&self) -> &C {
        &self.context
    }

    fn run(hook: &mut Option<HookFn<C>>, context: &mut C) -> HookResult {
        match hook {
            Some(hook) => hook(context),
            None => Ok(()),
        }
    }
}

impl<C> State for FnState<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self) -> HookResult {
        Self::run(&mut self.on_enter, &mut self.context)
    }

    fn maintain(&mut self) -> HookResult {
        Self::run(&mut self.on_maintain, &mut self.context)
    }

    fn exit(&mut self) -> HookResult {
        Self::run(&mut self.on_exit, &mut self.context)
    }

    fn abort(&mut self) -> HookResult {
        Self::run(&mut self.on_abort, &mut self.context)
    }

    fn exit_condition(&self) -> bool {
        (self.exit_when)(&self.context)
    }
}

impl<C: fmt::Debug> fmt::Debug for FnState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnState")
            .field("name", &self.name)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Builder for closure-backed states with a fluent API.
///
/// # Example
///
/// ```rust
/// use staque::builder::StateBuilder;
/// use staque::core::State;
///
/// let heat = StateBuilder::new(20.0_f64)
///     .name("Preheat")
///     .on_maintain(|celsius| {
///         *celsius += 15.0;
///         Ok(())
///     })
///     .exit_when(|celsius| *celsius >= 180.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(heat.name(), "Preheat");
/// assert!(!heat.exit_condition());
/// ```
pub struct StateBuilder<C> {
    context: C,
    name: Option<String>,
    on_enter: Option<HookFn<C>>,
    on_maintain: Option<HookFn<C>>,
    on_exit: Option<HookFn<C>>,
    on_abort: Option<HookFn<C>>,
    exit_when: Option<ExitCondition<C>>,
}

impl<C> StateBuilder<C> {
    /// Create a builder around the state's context.
    pub fn new(context: C) -> Self {
        Self {
            context,
            name: None,
            on_enter: None,
            on_maintain: None,
            on_exit: None,
            on_abort: None,
            exit_when: None,
        }
    }

    /// Set the state name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut C) -> HookResult + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub fn on_maintain<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut C) -> HookResult + 'static,
    {
        self.on_maintain = Some(Box::new(hook));
        self
    }

    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut C) -> HookResult + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    pub fn on_abort<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut C) -> HookResult + 'static,
    {
        self.on_abort = Some(Box::new(hook));
        self
    }

    /// Set the exit condition (required).
    ///
    /// The predicate may be evaluated before `enter` has run.
    pub fn exit_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.exit_when = Some(Box::new(predicate));
        self
    }

    /// Build the state.
    pub fn build(self) -> Result<FnState<C>, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let exit_when = self.exit_when.ok_or(BuildError::MissingExitCondition)?;

        Ok(FnState {
            name,
            context: self.context,
            on_enter: self.on_enter,
            on_maintain: self.on_maintain,
            on_exit: self.on_exit,
            on_abort: self.on_abort,
            exit_when,
        })
    }
}
