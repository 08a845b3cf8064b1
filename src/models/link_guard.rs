// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Confirmation gate for desktop-only live links.

use super::portfolio::Project;
use crate::util::platform::Platform;

/// Viewports at or below this width count as mobile.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

/// What happened when a live link was followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The link was handed to the platform right away
    Opened,
    /// The link is waiting for the user to confirm
    NeedsConfirmation,
    /// The project has no live link
    NoLink,
}

/// Holds at most one link awaiting confirmation.
#[derive(Debug, Default)]
pub struct LinkGuard {
    pending: Option<String>,
}

impl LinkGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The link shown in the confirmation modal, if it is open.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Follow a project's live link, intercepting desktop-only links on narrow viewports.
    pub fn follow(&mut self, project: &Project, platform: &dyn Platform) -> LinkOutcome {
        let Some(url) = project.live_link.as_deref() else {
            return LinkOutcome::NoLink;
        };

        if project.desktop_only && platform.viewport_width() <= MOBILE_MAX_WIDTH {
            log::info!("Desktop-only link intercepted: {}", url);
            self.pending = Some(url.to_string());
            LinkOutcome::NeedsConfirmation
        } else {
            platform.open_in_new_tab(url);
            LinkOutcome::Opened
        }
    }

    /// "continue": open the pending link and close the modal.
    pub fn confirm(&mut self, platform: &dyn Platform) {
        if let Some(url) = self.pending.take() {
            platform.open_in_new_tab(&url);
        }
    }

    /// "cancel": discard the pending link.
    pub fn cancel(&mut self) {
        if let Some(url) = self.pending.take() {
            log::debug!("Discarded desktop-only link {}", url);
        }
    }
}
