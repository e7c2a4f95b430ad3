// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod action;
pub use action::Action;

mod app_state;
pub use app_state::AppState;

pub mod deadline;

mod task_model;
pub use task_model::{TaskId, TaskModel};

mod task_row_model;
pub use task_row_model::TaskRowModel;
