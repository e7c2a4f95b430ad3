// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(target_arch = "wasm32")]
pub use browser_storage::*;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage;
#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::*;

mod memory_storage;
pub use memory_storage::*;

mod mock_clock;
pub use mock_clock::*;

mod system_clock;
pub use system_clock::*;

mod task_repository;
pub use task_repository::*;

pub mod traits;

use crate::TrackerConfig;

/// The storage the application persists to on this platform. Falls back to
/// in-memory storage, so the tracker still works for the session.
#[cfg(target_arch = "wasm32")]
pub fn platform_storage(_config: &TrackerConfig) -> Rc<dyn traits::KeyValueStorage> {
    match BrowserStorage::new() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("{}. Tasks will not survive a reload.", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// The storage the application persists to on this platform. Falls back to
/// in-memory storage, so the tracker still works for the session.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_storage(config: &TrackerConfig) -> Rc<dyn traits::KeyValueStorage> {
    match config.resolve_data_dir() {
        Some(dir) => {
            log::info!("Storing tasks in {}", dir.display());
            Rc::new(FileStorage::new(dir))
        }
        None => {
            log::warn!("No data directory found for this user. Tasks will not be saved.");
            Rc::new(MemoryStorage::new())
        }
    }
}

pub fn clock() -> impl traits::Clock + Clone {
    SystemClock
}
