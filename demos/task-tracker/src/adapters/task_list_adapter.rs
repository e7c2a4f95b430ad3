// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    controllers::{task_rows, TaskListController},
    models::{TaskModel, TaskRowModel},
    ui,
};

// one place to implement connection between adapter (view) and controller
pub fn connect(view_handle: &ui::MainWindow, controller: TaskListController) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.on_toggle_task({
        let controller = controller.clone();

        move |index| {
            controller.toggle_task(index as usize);
        }
    });

    adapter.on_edit_task({
        let controller = controller.clone();

        move |index| {
            controller.edit_task(index as usize);
        }
    });

    adapter.on_remove_task({
        let controller = controller.clone();

        move |index| {
            controller.remove_task(index as usize);
        }
    });
}

pub fn refresh(view_handle: &ui::MainWindow, tasks: &[TaskModel]) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();
    let items: Vec<ui::TaskItem> = task_rows(tasks).into_iter().map(map_row_to_item).collect();

    let model = adapter.get_tasks();
    match model.as_any().downcast_ref::<VecModel<ui::TaskItem>>() {
        Some(rows) => update_rows(rows, items),
        None => adapter.set_tasks(Rc::new(VecModel::from(items)).into()),
    }
}

// replaces only the rows that differ
fn update_rows(rows: &VecModel<ui::TaskItem>, items: Vec<ui::TaskItem>) {
    let len = items.len();

    for (index, item) in items.into_iter().enumerate() {
        match rows.row_data(index) {
            Some(row) if row == item => {}
            Some(_) => rows.set_row_data(index, item),
            None => rows.push(item),
        }
    }

    while rows.row_count() > len {
        rows.remove(rows.row_count() - 1);
    }
}

// maps a TaskRowModel (data) to a TaskItem (ui)
fn map_row_to_item(row: TaskRowModel) -> ui::TaskItem {
    ui::TaskItem { text: row.text.into(), deadline: row.deadline.into(), completed: row.completed }
}
