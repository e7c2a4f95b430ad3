// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Error returned by the key-value storage backends
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    /// No storage is available on this platform, or the user disabled it.
    #[error("Storage is not available: {0}")]
    Unavailable(String),
    /// The stored value could not be read or written.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stored value is not a valid task list.
    #[error("Cannot (de)serialize the task list: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The browser storage threw an exception.
    #[error("Storage backend error: {0}")]
    Backend(String),
}
