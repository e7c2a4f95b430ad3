// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! The transition function of the task tracker.
//!
//! [`reduce`] computes the next [`AppState`] from the current one and an
//! [`Action`]. It performs no I/O: when the task list changed it returns
//! [`Effect::Persist`] and leaves the write to the caller.

use crate::models::{Action, AppState, TaskId, TaskModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The whole task list must be written back to storage.
    Persist,
}

pub fn reduce(state: &AppState, action: Action, now_millis: i64) -> (AppState, Effect) {
    match action {
        Action::SetDraftText(draft_text) => (AppState { draft_text, ..state.clone() }, Effect::None),
        Action::SetDraftDeadline(draft_deadline) => {
            (AppState { draft_deadline, ..state.clone() }, Effect::None)
        }
        Action::OpenCreateDialog => {
            (AppState { create_dialog_open: true, ..state.clone() }, Effect::None)
        }
        Action::CloseCreateDialog => {
            (AppState { create_dialog_open: false, ..state.clone() }, Effect::None)
        }
        Action::OpenEditDialog(task) => (
            AppState {
                edit_dialog_open: true,
                draft_text: task.text.clone(),
                draft_deadline: Some(task.deadline),
                editing: Some(task),
                ..state.clone()
            },
            Effect::None,
        ),
        Action::CloseEditDialog => (close_edit_dialog(state.clone()), Effect::None),
        Action::CreateTask => create_task(state, now_millis),
        Action::ToggleCompleted(id) => {
            let tasks = state
                .tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        TaskModel { completed: !task.completed, ..task.clone() }
                    } else {
                        task.clone()
                    }
                })
                .collect();

            (AppState { tasks, ..state.clone() }, Effect::Persist)
        }
        Action::DeleteTask(id) => {
            let tasks = state.tasks.iter().filter(|task| task.id != id).cloned().collect();
            (AppState { tasks, ..state.clone() }, Effect::Persist)
        }
        Action::ConfirmEdit => confirm_edit(state),
        Action::LoadPersisted(tasks) => (AppState { tasks, ..state.clone() }, Effect::None),
    }
}

/// Picks the id for a task created at `now_millis`.
///
/// Ids stay creation timestamps but never repeat, even for several tasks
/// created within the same millisecond.
pub fn next_task_id(tasks: &[TaskModel], now_millis: i64) -> TaskId {
    match tasks.iter().map(|task| task.id).max() {
        Some(last) if last >= now_millis => last.saturating_add(1),
        _ => now_millis,
    }
}

fn create_task(state: &AppState, now_millis: i64) -> (AppState, Effect) {
    let Some(deadline) = state.draft_deadline.filter(|_| state.has_valid_draft()) else {
        return (state.clone(), Effect::None);
    };

    let mut tasks = state.tasks.clone();
    tasks.push(TaskModel {
        id: next_task_id(&state.tasks, now_millis),
        text: state.draft_text.clone(),
        deadline,
        completed: false,
    });

    (
        AppState {
            tasks,
            draft_text: String::new(),
            draft_deadline: None,
            create_dialog_open: false,
            ..state.clone()
        },
        Effect::Persist,
    )
}

fn confirm_edit(state: &AppState) -> (AppState, Effect) {
    let target = state.editing.as_ref().map(|task| task.id);

    let tasks = state
        .tasks
        .iter()
        .map(|task| {
            if Some(task.id) != target {
                return task.clone();
            }

            TaskModel {
                text: state.draft_text.clone(),
                // an unparsable deadline field leaves the stored deadline alone
                deadline: state.draft_deadline.unwrap_or(task.deadline),
                ..task.clone()
            }
        })
        .collect();

    (close_edit_dialog(AppState { tasks, ..state.clone() }), Effect::Persist)
}

fn close_edit_dialog(state: AppState) -> AppState {
    AppState {
        edit_dialog_open: false,
        editing: None,
        draft_text: String::new(),
        draft_deadline: None,
        ..state
    }
}
