// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page controls under the project list.

use crate::app::{Action, WorkPage};

/// Prev / "page / total" / next, only when there is more than one page.
pub fn show(ui: &mut egui::Ui, page: &WorkPage, actions: &mut Vec<Action>) {
    if page.total_pages <= 1 {
        return;
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(page.can_prev, egui::Button::new("prev")).clicked() {
            actions.push(Action::PrevPage);
        }
        ui.label(format!("{} / {}", page.page, page.total_pages));
        if ui.add_enabled(page.can_next, egui::Button::new("next")).clicked() {
            actions.push(Action::NextPage);
        }
    });
}
