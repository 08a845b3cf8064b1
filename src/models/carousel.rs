// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media carousel navigation.
//!
//! A project's media is an optional video followed by its photos. The
//! transitions here are shared by the inline carousel and the fullscreen
//! viewer; only the owner of the resulting slot differs.

use super::portfolio::{Project, ProjectId};
use std::collections::HashMap;

/// One displayable media item of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Video,
    Photo(usize),
}

/// What media a project has, which is all the transitions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaShape {
    pub has_video: bool,
    pub photo_count: usize,
}

impl MediaShape {
    pub fn of(project: &Project) -> Self {
        Self {
            has_video: project.has_video(),
            photo_count: project.photos.len(),
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.has_video) + self.photo_count
    }

    /// Prev/next controls only make sense with two or more items.
    pub fn is_navigable(&self) -> bool {
        self.len() > 1
    }

    /// The slot shown before any interaction: the first photo, else the video.
    pub fn initial(&self) -> Option<MediaSlot> {
        if self.photo_count > 0 {
            Some(MediaSlot::Photo(0))
        } else if self.has_video {
            Some(MediaSlot::Video)
        } else {
            None
        }
    }

    pub fn contains(&self, slot: MediaSlot) -> bool {
        match slot {
            MediaSlot::Video => self.has_video,
            MediaSlot::Photo(i) => i < self.photo_count,
        }
    }

    /// Map a possibly stale slot onto this shape.
    pub fn clamp(&self, slot: MediaSlot) -> Option<MediaSlot> {
        if self.contains(slot) {
            return Some(slot);
        }
        match slot {
            MediaSlot::Photo(_) if self.photo_count > 0 => {
                Some(MediaSlot::Photo(self.photo_count - 1))
            }
            _ => self.initial(),
        }
    }

    fn last_photo(&self) -> Option<MediaSlot> {
        self.photo_count.checked_sub(1).map(MediaSlot::Photo)
    }

    /// Step forward: photos in order, then the video, then around again.
    pub fn next(&self, slot: MediaSlot) -> MediaSlot {
        match slot {
            MediaSlot::Video => {
                if self.photo_count > 0 {
                    MediaSlot::Photo(0)
                } else {
                    MediaSlot::Video
                }
            }
            MediaSlot::Photo(i) if i + 1 < self.photo_count => MediaSlot::Photo(i + 1),
            MediaSlot::Photo(i) => {
                if self.has_video {
                    MediaSlot::Video
                } else if self.photo_count > 0 {
                    MediaSlot::Photo(0)
                } else {
                    MediaSlot::Photo(i)
                }
            }
        }
    }

    /// Step backward; the exact mirror of [`MediaShape::next`].
    pub fn prev(&self, slot: MediaSlot) -> MediaSlot {
        match slot {
            MediaSlot::Video => self.last_photo().unwrap_or(MediaSlot::Video),
            MediaSlot::Photo(0) => {
                if self.has_video {
                    MediaSlot::Video
                } else {
                    self.last_photo().unwrap_or(MediaSlot::Photo(0))
                }
            }
            MediaSlot::Photo(i) => MediaSlot::Photo(i - 1),
        }
    }
}

/// Per-project carousel positions, keyed by stable project id.
#[derive(Debug, Default)]
pub struct CarouselStates {
    slots: HashMap<ProjectId, MediaSlot>,
}

impl CarouselStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current slot for a project, falling back to the shape's initial slot.
    pub fn current(&self, id: ProjectId, shape: MediaShape) -> Option<MediaSlot> {
        match self.slots.get(&id) {
            Some(&slot) => shape.clamp(slot),
            None => shape.initial(),
        }
    }

    pub fn next(&mut self, id: ProjectId, shape: MediaShape) -> Option<MediaSlot> {
        let slot = shape.next(self.current(id, shape)?);
        self.slots.insert(id, slot);
        Some(slot)
    }

    pub fn prev(&mut self, id: ProjectId, shape: MediaShape) -> Option<MediaSlot> {
        let slot = shape.prev(self.current(id, shape)?);
        self.slots.insert(id, slot);
        Some(slot)
    }

    /// Jump straight to an indicator. Returns false for a slot the project lacks.
    pub fn jump(&mut self, id: ProjectId, shape: MediaShape, slot: MediaSlot) -> bool {
        if !shape.contains(slot) {
            return false;
        }
        self.slots.insert(id, slot);
        true
    }
}
