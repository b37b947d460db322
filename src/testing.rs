//! Instrumented state used by unit tests to observe hook ordering.

use crate::core::{Hook, HookResult, State};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Enter(&'static str),
    Maintain(&'static str),
    Exit(&'static str),
    Abort(&'static str),
}

/// Shared, append-only record of hook calls across several probes.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub(crate) fn count(&self, call: Call) -> usize {
        self.0.borrow().iter().filter(|c| **c == call).count()
    }

    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }
}

pub(crate) struct Probe {
    name: &'static str,
    log: CallLog,
    maintains: u32,
    done_after: Option<u32>,
    failing: Vec<Hook>,
}

impl Probe {
    pub(crate) fn new(name: &'static str) -> (Self, CallLog) {
        let log = CallLog::default();
        (Self::with_log(name, &log), log)
    }

    pub(crate) fn with_log(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: log.clone(),
            maintains: 0,
            done_after: None,
            failing: Vec::new(),
        }
    }

    /// Report done once `maintain` has run `n` times (immediately for 0).
    pub(crate) fn done_after(mut self, n: u32) -> Self {
        self.done_after = Some(n);
        self
    }

    pub(crate) fn failing(mut self, hook: Hook) -> Self {
        self.failing.push(hook);
        self
    }

    fn outcome(&self, hook: Hook) -> HookResult {
        if self.failing.contains(&hook) {
            return Err(format!("{} failed in {}", self.name, hook).into());
        }
        Ok(())
    }
}

impl State for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn enter(&mut self) -> HookResult {
        self.log.push(Call::Enter(self.name));
        self.outcome(Hook::Enter)
    }

    fn maintain(&mut self) -> HookResult {
        self.log.push(Call::Maintain(self.name));
        self.maintains += 1;
        self.outcome(Hook::Maintain)
    }

    fn exit(&mut self) -> HookResult {
        self.log.push(Call::Exit(self.name));
        self.outcome(Hook::Exit)
    }

    fn abort(&mut self) -> HookResult {
        self.log.push(Call::Abort(self.name));
        self.outcome(Hook::Abort)
    }

    fn exit_condition(&self) -> bool {
        self.done_after.is_some_and(|n| self.maintains >= n)
    }
}
