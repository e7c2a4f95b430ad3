// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

pub mod task_dialog_adapter;
pub mod task_list_adapter;
