// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};

use super::{TaskId, TaskModel};

/// Everything the view can ask the task store to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetDraftText(String),
    SetDraftDeadline(Option<DateTime<Utc>>),
    OpenCreateDialog,
    CloseCreateDialog,
    OpenEditDialog(TaskModel),
    CloseEditDialog,
    CreateTask,
    ToggleCompleted(TaskId),
    DeleteTask(TaskId),
    ConfirmEdit,
    LoadPersisted(Vec<TaskModel>),
}
