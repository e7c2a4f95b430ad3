// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use super::TaskStore;
use crate::models::{deadline, Action, TaskId, TaskModel, TaskRowModel};

/// Turns row-level requests from the list into store actions. Rows are
/// addressed by index and resolved to the task id at the time of the click.
#[derive(Clone)]
pub struct TaskListController {
    store: Rc<TaskStore>,
}

impl TaskListController {
    pub fn new(store: Rc<TaskStore>) -> Self {
        Self { store }
    }

    pub fn toggle_task(&self, index: usize) {
        if let Some(id) = self.task_id(index) {
            self.store.dispatch(Action::ToggleCompleted(id));
        }
    }

    pub fn remove_task(&self, index: usize) {
        if let Some(id) = self.task_id(index) {
            self.store.dispatch(Action::DeleteTask(id));
        }
    }

    pub fn edit_task(&self, index: usize) {
        if let Some(task) = self.store.with_state(|state| state.task(index).cloned()) {
            self.store.dispatch(Action::OpenEditDialog(task));
        }
    }

    fn task_id(&self, index: usize) -> Option<TaskId> {
        let id = self.store.with_state(|state| state.task(index).map(|task| task.id));
        if id.is_none() {
            log::warn!("No task at row {}", index);
        }
        id
    }
}

/// One row per task, in list order.
pub fn task_rows(tasks: &[TaskModel]) -> Vec<TaskRowModel> {
    tasks.iter().map(task_row).collect()
}

pub fn task_row(task: &TaskModel) -> TaskRowModel {
    TaskRowModel {
        text: task.text.clone(),
        deadline: deadline::format_deadline(&task.deadline),
        completed: task.completed,
    }
}
