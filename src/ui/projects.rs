// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project cards with their media carousels.
//!
//! This module draws one card per visible project: title, links,
//! description, tags and a carousel over the project's video and photos.
//! Carousel controls are only shown while the controls deadline is live.

use super::media::{self, MediaTextures};
use crate::app::{Action, AppState};
use crate::io::media::MediaKind;
use crate::models::carousel::{MediaShape, MediaSlot};
use crate::models::portfolio::{Project, ProjectId};
use std::time::Instant;

/// Height reserved for the carousel media.
const CAROUSEL_HEIGHT: f32 = 300.0;

/// Display the cards for the projects on the current page.
pub fn show(
    ui: &mut egui::Ui,
    state: &AppState,
    visible: &[ProjectId],
    textures: &mut MediaTextures,
    now: Instant,
    actions: &mut Vec<Action>,
) {
    if visible.is_empty() {
        ui.label(egui::RichText::new("no projects match").italics().weak());
        return;
    }

    for &id in visible {
        let Some(project) = state.portfolio().project(id) else {
            continue;
        };
        ui.push_id(id.0, |ui| {
            card(ui, state, id, project, textures, now, actions);
        });
        ui.add_space(24.0);
    }
}

fn card(
    ui: &mut egui::Ui,
    state: &AppState,
    id: ProjectId,
    project: &Project,
    textures: &mut MediaTextures,
    now: Instant,
    actions: &mut Vec<Action>,
) {
    ui.label(egui::RichText::new(&project.title).size(18.0).strong());

    ui.horizontal_wrapped(|ui| {
        if let Some(ref link) = project.link {
            if ui.link(link).clicked() {
                actions.push(Action::OpenLink(link.clone()));
            }
        }
        if let Some(ref live) = project.live_link {
            let mut response = ui.link(live);
            if project.desktop_only {
                response = response.on_hover_text("desktop only");
            }
            if response.clicked() {
                actions.push(Action::FollowLiveLink(id));
            }
        }
    });

    ui.label(&project.description);

    ui.horizontal_wrapped(|ui| {
        for tag in &project.tags {
            ui.label(egui::RichText::new(tag).small().background_color(egui::Color32::from_gray(45)));
        }
    });

    ui.add_space(8.0);
    carousel(ui, state, id, project, textures, now, actions);
}

fn carousel(
    ui: &mut egui::Ui,
    state: &AppState,
    id: ProjectId,
    project: &Project,
    textures: &mut MediaTextures,
    now: Instant,
    actions: &mut Vec<Action>,
) {
    let shape = MediaShape::of(project);
    let Some(slot) = state.carousel_slot(id) else {
        return;
    };

    let (area, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), CAROUSEL_HEIGHT),
        egui::Sense::hover(),
    );

    let (reference, kind, label) = match slot {
        MediaSlot::Video => (project.video().unwrap_or_default(), MediaKind::Video, "▶ video".to_string()),
        MediaSlot::Photo(i) => (
            project.photos[i].as_str(),
            MediaKind::Photo,
            format!("{} - image {}", project.title, i + 1),
        ),
    };
    let media_id = ui.id().with("media");
    let texture = textures.get(reference, kind);
    let rect = media::media_rect(texture, area);
    let response = media::paint(ui, rect, media_id, texture, &label);
    if response.clicked() {
        actions.push(Action::OpenFullscreen(id));
    }

    if !shape.is_navigable() {
        return;
    }

    let mut hovered = ui.rect_contains_pointer(area);
    let visible = state.controls_visible(id, now);
    ui.add_visible_ui(visible, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⏴").clicked() {
                actions.push(Action::CarouselPrev(id));
            }
            indicators(ui, shape, slot, |target| actions.push(Action::CarouselJump(id, target)));
            if ui.button("⏵").clicked() {
                actions.push(Action::CarouselNext(id));
            }
            hovered |= ui.rect_contains_pointer(ui.min_rect());
        });
    });
    actions.push(Action::CarouselHover(id, hovered));
}

/// One button per media item; the active one is highlighted.
pub fn indicators(ui: &mut egui::Ui, shape: MediaShape, current: MediaSlot, mut on_jump: impl FnMut(MediaSlot)) {
    if shape.has_video && ui.selectable_label(current == MediaSlot::Video, "Video").clicked() {
        on_jump(MediaSlot::Video);
    }
    for i in 0..shape.photo_count {
        let slot = MediaSlot::Photo(i);
        if ui.selectable_label(current == slot, (i + 1).to_string()).clicked() {
            on_jump(slot);
        }
    }
}
