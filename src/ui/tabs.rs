// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tab bar for switching between content categories.

use crate::app::{Action, Tab};
use crate::models::portfolio::Tabs;

/// Display the tab bar, labelled with the configured titles.
pub fn show(ui: &mut egui::Ui, tabs: &Tabs, active: Tab, actions: &mut Vec<Action>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;

        for tab in Tab::ALL {
            if ui.selectable_label(active == tab, tab.title(tabs)).clicked() && active != tab {
                actions.push(Action::SelectTab(tab));
            }
        }
    });
    ui.separator();
}
