// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::Cell, rc::Rc};

use super::traits;

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct MockClock {
    now: Rc<Cell<i64>>,
}

impl MockClock {
    pub fn new(now_millis: i64) -> Self {
        Self { now: Rc::new(Cell::new(now_millis)) }
    }

    pub fn set(&self, now_millis: i64) {
        self.now.set(now_millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl traits::Clock for MockClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
