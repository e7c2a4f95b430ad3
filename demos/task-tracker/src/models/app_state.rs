// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};

use super::TaskModel;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub tasks: Vec<TaskModel>,

    // values bound to whichever dialog (or the entry box) is currently shown
    pub draft_text: String,
    pub draft_deadline: Option<DateTime<Utc>>,

    pub create_dialog_open: bool,
    pub edit_dialog_open: bool,

    /// The record the edit dialog was opened for.
    pub editing: Option<TaskModel>,
}

impl AppState {
    pub fn task(&self, index: usize) -> Option<&TaskModel> {
        self.tasks.get(index)
    }

    pub fn has_valid_draft(&self) -> bool {
        !self.draft_text.trim().is_empty() && self.draft_deadline.is_some()
    }
}
