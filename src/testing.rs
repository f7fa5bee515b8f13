//! Test utilities shared across unit and integration tests.
//!
//! This module is compiled with `std` but hidden from documentation.
//! Most outcome tests need to prove that a closure did or did not run, so the
//! canonical helper here is a call recorder.

#![doc(hidden)]

use std::cell::RefCell;
use std::vec::Vec;

/// Records which closures ran, in order.
///
/// Closures only need a shared borrow, so one log can be captured by every
/// closure passed to a combinator.
#[derive(Debug, Default)]
pub struct CallLog {
    entries: RefCell<Vec<&'static str>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, name: &'static str) {
        self.entries.borrow_mut().push(name);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.entries.borrow().iter().filter(|entry| **entry == name).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
