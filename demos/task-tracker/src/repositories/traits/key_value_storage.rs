// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::StorageError;

/// Synchronous string storage addressed by key, like the browser's
/// `localStorage`.
pub trait KeyValueStorage {
    /// Returns `Ok(None)` when nothing was stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}
