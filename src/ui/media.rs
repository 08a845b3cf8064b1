// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media textures and drawing.
//!
//! Textures are requested lazily the first time a reference is drawn and
//! uploaded once the background decode finishes.

use crate::io::media::{is_remote, MediaKind, MediaLoader};
use crate::util::geometry::fit_within;
use std::collections::HashMap;
use std::path::PathBuf;

/// Load state of one media reference.
pub enum TextureSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
    /// Remote references are not fetched
    Remote,
}

/// Texture cache keyed by media reference.
pub struct MediaTextures {
    loader: MediaLoader,
    slots: HashMap<String, TextureSlot>,
}

impl MediaTextures {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            loader: MediaLoader::new(base_dir),
            slots: HashMap::new(),
        }
    }

    /// Upload any decodes that finished since the last frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        for finished in self.loader.poll() {
            let slot = match finished.result {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    TextureSlot::Ready(ctx.load_texture(
                        finished.reference.as_str(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(_) => TextureSlot::Failed,
            };
            self.slots.insert(finished.reference, slot);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, TextureSlot::Loading))
    }

    /// Get the slot for a reference, starting its load on first use.
    pub fn get(&mut self, reference: &str, kind: MediaKind) -> &TextureSlot {
        if !self.slots.contains_key(reference) {
            let slot = if is_remote(reference) {
                TextureSlot::Remote
            } else {
                self.loader.request(reference, kind);
                TextureSlot::Loading
            };
            self.slots.insert(reference.to_string(), slot);
        }
        &self.slots[reference]
    }

    /// URL handed to the platform for external playback.
    pub fn external_url(&self, reference: &str) -> String {
        self.loader.external_url(reference)
    }
}

/// Fit a texture centered inside `area`, keeping its aspect ratio.
pub fn texture_rect(texture: &egui::TextureHandle, area: egui::Rect) -> egui::Rect {
    let [w, h] = texture.size();
    let (width, height) = fit_within(w as u32, h as u32, area.width(), area.height());
    egui::Rect::from_center_size(area.center(), egui::vec2(width, height))
}

/// Where a slot is drawn inside `area`; placeholders use a 4:3 box.
pub fn media_rect(slot: &TextureSlot, area: egui::Rect) -> egui::Rect {
    match slot {
        TextureSlot::Ready(texture) => texture_rect(texture, area),
        _ => {
            let (width, height) = fit_within(4, 3, area.width(), area.height());
            egui::Rect::from_center_size(area.center(), egui::vec2(width, height))
        }
    }
}

/// Paint a media slot into `rect` and make it clickable.
pub fn paint(ui: &mut egui::Ui, rect: egui::Rect, id: egui::Id, slot: &TextureSlot, label: &str) -> egui::Response {
    let painter = ui.painter_at(rect.expand(1.0));
    match slot {
        TextureSlot::Ready(texture) => {
            egui::Image::from_texture(texture).paint_at(ui, rect);
        }
        other => {
            let text = match other {
                TextureSlot::Loading => format!("loading {}", label),
                TextureSlot::Remote => format!("{} (remote)", label),
                _ => label.to_string(),
            };
            painter.rect_filled(rect, 4.0, egui::Color32::from_gray(40));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(180),
            );
        }
    }
    ui.interact(rect, id, egui::Sense::click())
}

/// Small fixed-size thumbnail (logos, avatars, profile image).
pub fn thumbnail(ui: &mut egui::Ui, textures: &mut MediaTextures, reference: Option<&str>, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    match reference.map(|r| textures.get(r, MediaKind::Photo)) {
        Some(TextureSlot::Ready(texture)) => {
            egui::Image::from_texture(texture)
                .rounding(4.0)
                .paint_at(ui, texture_rect(texture, rect));
        }
        _ => {
            ui.painter().rect_filled(rect, 4.0, egui::Color32::from_gray(50));
        }
    }
}
