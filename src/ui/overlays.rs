// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Full-screen overlays: the media viewer and the desktop-only warning.
//!
//! Both draw a dimmed backdrop that dismisses the overlay when clicked.
//! Widgets added after the backdrop sit on top of it and take the click.

use super::media::{self, MediaTextures};
use super::projects::indicators;
use crate::app::{Action, AppState};
use crate::io::media::MediaKind;
use crate::models::carousel::{MediaShape, MediaSlot};

/// Fraction of the screen the fullscreen media may occupy.
const MEDIA_FRACTION: f32 = 0.85;

/// Dim the whole screen; the area grows to cover it so clicks anywhere land here.
fn backdrop(ui: &mut egui::Ui, alpha: u8) -> egui::Response {
    let screen = ui.ctx().screen_rect();
    ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(alpha));
    ui.allocate_rect(screen, egui::Sense::click())
}

/// Fullscreen media viewer, navigable independently of the inline carousel.
pub fn fullscreen(ctx: &egui::Context, state: &AppState, textures: &mut MediaTextures, actions: &mut Vec<Action>) {
    let Some(view) = state.fullscreen() else {
        return;
    };
    let Some(project) = state.portfolio().project(view.project) else {
        return;
    };
    let shape = MediaShape::of(project);

    egui::Area::new(egui::Id::new("fullscreen_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            if backdrop(ui, 230).clicked() {
                actions.push(Action::CloseFullscreen);
            }

            let (reference, kind) = match view.slot {
                MediaSlot::Video => (project.video().unwrap_or_default(), MediaKind::Video),
                MediaSlot::Photo(i) => (project.photos[i].as_str(), MediaKind::Photo),
            };
            let area = egui::Rect::from_center_size(screen.center(), screen.size() * MEDIA_FRACTION);
            let texture = textures.get(reference, kind);
            let rect = media::media_rect(texture, area);
            let label = match view.slot {
                MediaSlot::Video => "▶ play video",
                MediaSlot::Photo(_) => "image",
            };
            let response = media::paint(ui, rect, egui::Id::new("fullscreen_media"), texture, label);
            if view.slot == MediaSlot::Video {
                let response = response.on_hover_text("open in external player");
                if response.clicked() {
                    actions.push(Action::OpenLink(textures.external_url(reference)));
                }
            }

            let close = egui::Rect::from_min_size(screen.right_top() + egui::vec2(-48.0, 16.0), egui::vec2(32.0, 32.0));
            if ui.put(close, egui::Button::new(egui::RichText::new("×").size(20.0))).clicked() {
                actions.push(Action::CloseFullscreen);
            }

            if !shape.is_navigable() {
                return;
            }

            let nav_size = egui::vec2(40.0, 40.0);
            let prev = egui::Rect::from_center_size(screen.left_center() + egui::vec2(40.0, 0.0), nav_size);
            let next = egui::Rect::from_center_size(screen.right_center() - egui::vec2(40.0, 0.0), nav_size);
            if ui.put(prev, egui::Button::new("⏴")).clicked() {
                actions.push(Action::FullscreenPrev);
            }
            if ui.put(next, egui::Button::new("⏵")).clicked() {
                actions.push(Action::FullscreenNext);
            }

            let strip = egui::Rect::from_center_size(
                screen.center_bottom() - egui::vec2(0.0, 32.0),
                egui::vec2(screen.width(), 32.0),
            );
            ui.allocate_ui_at_rect(strip, |ui| {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center).with_main_align(egui::Align::Center), |ui| {
                    indicators(ui, shape, view.slot, |target| actions.push(Action::FullscreenJump(target)));
                });
            });
        });
}

/// Confirmation modal for a desktop-only link opened on a narrow viewport.
pub fn link_warning(ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
    if state.pending_link().is_none() {
        return;
    }

    egui::Area::new(egui::Id::new("link_warning_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            if backdrop(ui, 160).clicked() {
                actions.push(Action::CancelLink);
            }
        });

    egui::Area::new(egui::Id::new("link_warning"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).inner_margin(16.0).show(ui, |ui| {
                ui.set_max_width(320.0);
                ui.label(egui::RichText::new("desktop only").size(18.0).strong());
                ui.add_space(6.0);
                ui.label("the intended use of this is only for desktop and it may not be optimized for mobile.");
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        actions.push(Action::CancelLink);
                    }
                    if ui.button("continue to site").clicked() {
                        actions.push(Action::ConfirmLink);
                    }
                });
            });
        });
}
