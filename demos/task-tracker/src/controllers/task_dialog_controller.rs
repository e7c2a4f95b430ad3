// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::TaskStore;
use crate::models::{deadline, Action};

pub const DEADLINE_HINT: &str = "Select deadline";

/// Drives the entry box and the create/edit dialogs, which all share the
/// draft fields of the store.
#[derive(Clone)]
pub struct TaskDialogController {
    store: Rc<TaskStore>,
}

impl TaskDialogController {
    pub fn new(store: Rc<TaskStore>) -> Self {
        Self { store }
    }

    pub fn set_text(&self, text: &str) {
        self.store.dispatch(Action::SetDraftText(text.into()));
    }

    /// Anything that is not a complete date and time unsets the deadline.
    pub fn set_deadline_input(&self, input: &str) {
        self.store.dispatch(Action::SetDraftDeadline(deadline::parse_deadline_input(input)));
    }

    /// The entry box only opens the dialog once something was typed.
    pub fn request_create_dialog(&self) {
        if self.store.with_state(|state| state.draft_text.trim().is_empty()) {
            return;
        }

        self.store.dispatch(Action::OpenCreateDialog);
    }

    pub fn close_create_dialog(&self) {
        self.store.dispatch(Action::CloseCreateDialog);
    }

    pub fn create_task(&self) {
        self.store.dispatch(Action::CreateTask);
    }

    pub fn close_edit_dialog(&self) {
        self.store.dispatch(Action::CloseEditDialog);
    }

    pub fn confirm_edit(&self) {
        self.store.dispatch(Action::ConfirmEdit);
    }
}

/// Preview of the selected deadline, as the task row will show it.
pub fn deadline_hint(draft: Option<&DateTime<Utc>>) -> String {
    match draft {
        Some(draft) => deadline::format_deadline(draft),
        None => DEADLINE_HINT.into(),
    }
}
