// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;

use crate::{
    controllers::{deadline_hint, TaskDialogController},
    models::{deadline, AppState},
    ui,
};

// one place to implement connection between adapter (view) and controller
pub fn connect(view_handle: &ui::MainWindow, controller: TaskDialogController) {
    let adapter = view_handle.global::<ui::TaskDialogAdapter>();
    adapter.set_deadline_placeholder(deadline::INPUT_PLACEHOLDER.into());

    adapter.on_text_edited({
        let controller = controller.clone();

        move |text| controller.set_text(text.as_str())
    });

    adapter.on_deadline_edited({
        let controller = controller.clone();

        move |input| controller.set_deadline_input(input.as_str())
    });

    adapter.on_request_create_dialog({
        let controller = controller.clone();

        move || controller.request_create_dialog()
    });

    adapter.on_close_create_dialog({
        let controller = controller.clone();

        move || controller.close_create_dialog()
    });

    adapter.on_create_task({
        let controller = controller.clone();

        move || controller.create_task()
    });

    adapter.on_close_edit_dialog({
        let controller = controller.clone();

        move || controller.close_edit_dialog()
    });

    adapter.on_confirm_edit(move || controller.confirm_edit());
}

pub fn refresh(view_handle: &ui::MainWindow, state: &AppState) {
    let adapter = view_handle.global::<ui::TaskDialogAdapter>();

    // only write on change, the fields are bound to line edits the user is typing in
    if adapter.get_draft_text().as_str() != state.draft_text {
        adapter.set_draft_text(state.draft_text.as_str().into());
    }

    if let Some(input) = deadline::deadline_input_update(
        adapter.get_deadline_input().as_str(),
        state.draft_deadline.as_ref(),
    ) {
        adapter.set_deadline_input(input.into());
    }

    adapter.set_deadline_hint(deadline_hint(state.draft_deadline.as_ref()).into());
    adapter.set_create_dialog_open(state.create_dialog_open);
    adapter.set_edit_dialog_open(state.edit_dialog_open);
}
