// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use slint::ComponentHandle;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

pub mod controllers;
pub mod models;
pub mod reducer;
pub mod repositories;

use repositories::{traits::Clock, TaskRepository};

/// Builds the main window on top of the platform storage described by `config`.
pub fn init(config: &TrackerConfig) -> Result<ui::MainWindow, slint::PlatformError> {
    let storage = repositories::platform_storage(config);

    init_with(TaskRepository::new(storage, config.storage_key.clone()), repositories::clock())
}

/// Builds the main window, wires it to a fresh task store and loads the
/// persisted tasks.
pub fn init_with(
    repo: TaskRepository,
    clock: impl Clock + 'static,
) -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;
    let store = controllers::TaskStore::new(repo, clock);

    store.on_changed({
        let view_handle = view_handle.as_weak();

        move |state| {
            if let Some(view_handle) = view_handle.upgrade() {
                task_list_adapter::refresh(&view_handle, &state.tasks);
                task_dialog_adapter::refresh(&view_handle, state);
            }
        }
    });

    task_list_adapter::connect(&view_handle, controllers::TaskListController::new(store.clone()));
    task_dialog_adapter::connect(
        &view_handle,
        controllers::TaskDialogController::new(store.clone()),
    );

    if let Err(e) = store.load() {
        log::warn!("Ignoring stored tasks: {}", e);
    }

    let state = store.state();
    task_list_adapter::refresh(&view_handle, &state.tasks);
    task_dialog_adapter::refresh(&view_handle, &state);

    Ok(view_handle)
}

pub fn run() -> Result<(), slint::PlatformError> {
    let main_window = init(&TrackerConfig::default())?;

    main_window.run()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = run() {
        log::error!("Runtime error: {}", e);
    }
}
