// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use wasm_bindgen::JsValue;

use super::traits;
use crate::StorageError;

/// The page's `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn new() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(backend_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;

        Ok(Self { storage })
    }
}

impl traits::KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        // throws QuotaExceededError when the origin is out of space
        self.storage.set_item(key, blob).map_err(backend_error)
    }
}

fn backend_error(value: JsValue) -> StorageError {
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
