// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::traits;
use crate::StorageError;

/// Storage that lives as long as the process. Clones share their entries, so
/// a test can keep a handle and inspect what the application wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, blob: &str) -> Self {
        self.entries.borrow_mut().insert(key.into(), blob.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl traits::KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.into(), blob.into());
        Ok(())
    }
}
