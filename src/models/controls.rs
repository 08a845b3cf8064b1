// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Auto-hiding carousel controls.
//!
//! Each project has at most one pending hide deadline. Showing the
//! controls replaces the deadline, hiding removes it.

use super::portfolio::ProjectId;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// How long controls stay visible after the last interaction.
pub const HIDE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct ControlsVisibility {
    /// Hide deadline per project with visible controls
    deadlines: HashMap<ProjectId, Instant>,
    /// Projects whose carousel is currently under the pointer
    hovered: HashSet<ProjectId>,
}

impl ControlsVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show controls and restart the hide deadline.
    pub fn touch(&mut self, id: ProjectId, now: Instant) {
        self.deadlines.insert(id, now + HIDE_DELAY);
    }

    /// Hide immediately, cancelling any pending deadline.
    pub fn hide(&mut self, id: ProjectId) {
        self.deadlines.remove(&id);
    }

    pub fn is_visible(&self, id: ProjectId, now: Instant) -> bool {
        self.deadlines.get(&id).is_some_and(|&deadline| now < deadline)
    }

    /// Feed the pointer state for a carousel; enter shows, leave hides.
    pub fn track_hover(&mut self, id: ProjectId, hovered: bool, now: Instant) {
        if hovered {
            if self.hovered.insert(id) {
                self.touch(id, now);
            }
        } else if self.hovered.remove(&id) {
            self.hide(id);
        }
    }

    /// Drop expired deadlines and return the time until the next one fires.
    pub fn expire(&mut self, now: Instant) -> Option<Duration> {
        self.deadlines.retain(|_, deadline| *deadline > now);
        self.deadlines
            .values()
            .map(|deadline| deadline.saturating_duration_since(now))
            .min()
    }

    /// Cancel every pending deadline.
    pub fn clear(&mut self) {
        self.deadlines.clear();
        self.hovered.clear();
    }
}
