// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Search box and tag filter popover.
//!
//! The popover closes when a pointer press lands outside both the popover
//! and its trigger.

use crate::app::{Action, AppState};
use crate::models::filter::{all_tags, ALL_TAG};
use crate::util::platform::pressed_outside;

pub fn show(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let mut query = state.query().to_string();
        let search = egui::TextEdit::singleline(&mut query)
            .hint_text("search projects...")
            .desired_width(ui.available_width() - 160.0);
        if ui.add(search).changed() {
            actions.push(Action::SetQuery(query));
        }

        let trigger = ui.button("filter by category ⏷");
        if trigger.clicked() {
            actions.push(Action::ToggleFilterPopover);
        }

        if state.filter_open() {
            let popover = filter_popover(ui.ctx(), trigger.rect, state, actions);
            let pressed_at = ui
                .ctx()
                .input(|i| if i.pointer.any_pressed() { i.pointer.interact_pos() } else { None });
            if pressed_outside(pressed_at, &[popover, trigger.rect]) {
                actions.push(Action::CloseFilterPopover);
            }
        }
    });
}

/// Checkbox list of every tag; returns the popover's screen rect.
fn filter_popover(
    ctx: &egui::Context,
    trigger: egui::Rect,
    state: &AppState,
    actions: &mut Vec<Action>,
) -> egui::Rect {
    egui::Area::new(egui::Id::new("filter_popover"))
        .order(egui::Order::Foreground)
        .fixed_pos(trigger.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(trigger.width().max(160.0));
                for tag in all_tags(state.portfolio().projects()) {
                    let mut checked = state.tags().contains(&tag);
                    let label = if tag == ALL_TAG { "all projects" } else { tag.as_str() };
                    if ui.checkbox(&mut checked, label).clicked() {
                        actions.push(Action::ToggleTag(tag.clone()));
                    }
                }
            });
        })
        .response
        .rect
}
