// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// What a single row of the task list displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskRowModel {
    pub text: String,
    pub deadline: String,
    pub completed: bool,
}
