// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation timestamp in milliseconds, unique within a task list.
pub type TaskId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskModel {
    pub id: TaskId,
    pub text: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}
