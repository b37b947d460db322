//! Shared helpers for integration tests.

#![allow(dead_code)]

use staque::core::Hook;
use staque::{HookResult, State};
use std::cell::RefCell;
use std::rc::Rc;

/// Hook calls recorded as `(tag, hook)`, in call order.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<(usize, Hook)>>>);

impl Journal {
    pub fn entries(&self) -> Vec<(usize, Hook)> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn for_tag(&self, tag: usize) -> Vec<Hook> {
        self.0
            .borrow()
            .iter()
            .filter(|(t, _)| *t == tag)
            .map(|(_, hook)| *hook)
            .collect()
    }

    pub fn count(&self, tag: usize, hook: Hook) -> usize {
        self.for_tag(tag).into_iter().filter(|h| *h == hook).count()
    }

    pub fn since(&self, mark: usize) -> Vec<(usize, Hook)> {
        self.0.borrow()[mark..].to_vec()
    }
}

/// State that writes every hook call into a [`Journal`].
pub struct Recorder {
    tag: usize,
    name: String,
    journal: Journal,
    maintains: u32,
    done_after: Option<u32>,
    failing: Vec<Hook>,
}

impl Recorder {
    pub fn new(tag: usize, journal: &Journal) -> Self {
        Self {
            tag,
            name: format!("S{tag}"),
            journal: journal.clone(),
            maintains: 0,
            done_after: None,
            failing: Vec::new(),
        }
    }

    /// Report done once `maintain` has run `n` times.
    pub fn done_after(mut self, n: u32) -> Self {
        self.done_after = Some(n);
        self
    }

    pub fn failing(mut self, hook: Hook) -> Self {
        self.failing.push(hook);
        self
    }

    fn call(&mut self, hook: Hook) -> HookResult {
        self.journal.0.borrow_mut().push((self.tag, hook));
        if self.failing.contains(&hook) {
            return Err(format!("{} failed in {hook}", self.name).into());
        }
        Ok(())
    }
}

impl State for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self) -> HookResult {
        self.call(Hook::Enter)
    }

    fn maintain(&mut self) -> HookResult {
        self.maintains += 1;
        self.call(Hook::Maintain)
    }

    fn exit(&mut self) -> HookResult {
        self.call(Hook::Exit)
    }

    fn abort(&mut self) -> HookResult {
        self.call(Hook::Abort)
    }

    fn exit_condition(&self) -> bool {
        self.done_after.is_some_and(|n| self.maintains >= n)
    }
}
