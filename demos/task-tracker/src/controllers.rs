// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task_dialog_controller;
pub use task_dialog_controller::*;

mod task_list_controller;
pub use task_list_controller::*;

mod task_store;
pub use task_store::*;
