// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

type CallbackWrapper<Arguments, Result = ()> =
    Cell<Option<Box<dyn FnMut(&Arguments, &mut Result)>>>;

/// A single-slot listener. Registering a new handler replaces the previous one.
pub struct Callback<Arguments: ?Sized, Result = ()> {
    callback: CallbackWrapper<Arguments, Result>,
}

impl<Arguments: ?Sized, Res> Default for Callback<Arguments, Res> {
    fn default() -> Self {
        Self { callback: Default::default() }
    }
}

impl<Arguments: ?Sized, Result: Default> Callback<Arguments, Result> {
    pub fn on(&self, mut f: impl FnMut(&Arguments) -> Result + 'static) {
        self.callback.set(Some(Box::new(move |a: &Arguments, r: &mut Result| *r = f(a))));
    }

    /// Calls the handler, or returns `Result::default()` when none is set.
    ///
    /// The handler is taken out of its slot while it runs, so it may call
    /// back into the owner of this callback. A nested `invoke` made from
    /// inside the handler finds the slot empty and is dropped.
    pub fn invoke(&self, a: &Arguments) -> Result {
        let mut result = Result::default();

        if let Some(mut callback) = self.callback.take() {
            callback(a, &mut result);
            // keep a handler that was registered while this one was running
            let replaced = self.callback.take();
            self.callback.set(replaced.or(Some(callback)));
        }

        result
    }
}
