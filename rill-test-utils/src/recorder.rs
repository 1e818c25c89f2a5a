// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use std::rc::Rc;

/// Shared observation buffer for side-effect tests.
///
/// [`sink`](Self::sink) hands out closures that clone every observed value
/// into the buffer; the test later inspects what was seen and how often.
/// Multiple sinks may share one recorder.
pub struct Recorder<T> {
    seen: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            seen: Rc::clone(&self.seen),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer closure recording every value it is shown.
    pub fn sink(&self) -> impl FnMut(&T) {
        let seen = Rc::clone(&self.seen);
        move |value: &T| seen.borrow_mut().push(value.clone())
    }

    /// Everything recorded so far, in observation order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.seen.borrow().clone()
    }

    /// Number of observations so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}
