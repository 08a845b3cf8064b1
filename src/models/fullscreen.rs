// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fullscreen media overlay.
//!
//! The overlay starts from the carousel's slot but navigates on its own
//! copy, so closing it leaves the inline carousel where it was.

use super::carousel::{MediaShape, MediaSlot};
use super::portfolio::ProjectId;

/// An open fullscreen view of one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenMedia {
    pub project: ProjectId,
    pub slot: MediaSlot,
}

impl FullscreenMedia {
    pub fn open(project: ProjectId, slot: MediaSlot) -> Self {
        Self { project, slot }
    }

    pub fn next(&mut self, shape: MediaShape) {
        self.slot = shape.next(self.slot);
    }

    pub fn prev(&mut self, shape: MediaShape) {
        self.slot = shape.prev(self.slot);
    }

    pub fn jump(&mut self, shape: MediaShape, slot: MediaSlot) {
        if shape.contains(slot) {
            self.slot = slot;
        }
    }
}
