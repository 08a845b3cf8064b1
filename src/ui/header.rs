// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile header: name, bio, social links and picture.

use super::media::{thumbnail, MediaTextures};
use crate::app::Action;
use crate::models::portfolio::Profile;

pub fn show(ui: &mut egui::Ui, profile: &Profile, textures: &mut MediaTextures, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new(&profile.name).size(26.0).strong());
            for line in &profile.bio {
                ui.label(line);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                for (i, (label, url)) in profile.socials.iter().enumerate() {
                    if i > 0 {
                        ui.label(egui::RichText::new(".").weak());
                    }
                    if ui.link(label).on_hover_text(url).clicked() {
                        actions.push(Action::OpenLink(url.clone()));
                    }
                }
            });
        });

        if profile.image.is_some() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                thumbnail(ui, textures, profile.image.as_deref(), 96.0);
            });
        }
    });
}
