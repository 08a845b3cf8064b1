// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Read-only tabs: posts, experience, awards and testimonials.

use super::media::{thumbnail, MediaTextures};
use crate::app::Action;
use crate::models::portfolio::{message_runs, Award, Experience, Post, Testimonial};

const LOGO_SIZE: f32 = 40.0;
const AVATAR_SIZE: f32 = 32.0;

pub fn posts(ui: &mut egui::Ui, items: &[Post], actions: &mut Vec<Action>) {
    for post in items {
        ui.label(egui::RichText::new(&post.title).strong());
        if ui.link("read post →").on_hover_text(&post.link).clicked() {
            actions.push(Action::OpenLink(post.link.clone()));
        }
        ui.label(egui::RichText::new(&post.date).small().weak());
        ui.label(&post.description);
        ui.add_space(16.0);
    }
}

pub fn experience(ui: &mut egui::Ui, items: &[Experience], textures: &mut MediaTextures) {
    for job in items {
        ui.horizontal_top(|ui| {
            thumbnail(ui, textures, job.logo.as_deref(), LOGO_SIZE);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&job.title).strong());
                ui.label(&job.company);
                ui.label(egui::RichText::new(&job.period).small().weak());
                ui.add_space(4.0);
                ui.label(&job.description);
            });
        });
        ui.add_space(16.0);
    }
}

pub fn awards(ui: &mut egui::Ui, items: &[Award], textures: &mut MediaTextures, actions: &mut Vec<Action>) {
    for award in items {
        ui.horizontal_top(|ui| {
            thumbnail(ui, textures, award.logo.as_deref(), LOGO_SIZE);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&award.title).strong());
                match award.link {
                    Some(ref link) => {
                        if ui.link(&award.event).clicked() {
                            actions.push(Action::OpenLink(link.clone()));
                        }
                    }
                    None => {
                        ui.label(&award.event);
                    }
                }
                ui.label(egui::RichText::new(&award.date).small().weak());
                if let Some(ref note) = award.note {
                    ui.label(egui::RichText::new(note).italics());
                }
            });
        });
        ui.add_space(16.0);
    }
}

/// Chat-style bubbles; consecutive messages from one person share a header.
pub fn testimonials(ui: &mut egui::Ui, items: &[Testimonial], textures: &mut MediaTextures) {
    for (item, run) in items.iter().zip(message_runs(items)) {
        ui.horizontal_top(|ui| {
            if run.first {
                thumbnail(ui, textures, item.avatar.as_deref(), AVATAR_SIZE);
            } else {
                ui.add_space(AVATAR_SIZE + ui.spacing().item_spacing.x);
            }

            egui::Frame::none()
                .fill(egui::Color32::from_gray(35))
                .rounding(8.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        if run.first {
                            ui.label(egui::RichText::new(&item.name).strong());
                            ui.label(egui::RichText::new(&item.position).small().weak());
                        }
                        ui.label(&item.message);
                        ui.label(egui::RichText::new(&item.date).small().weak());
                    });
                });
        });
        ui.add_space(if run.last { 16.0 } else { 4.0 });
    }
}
