// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.
//!
//! Components draw from read-only state and push [`crate::app::Action`]s;
//! they never mutate the controller directly.

pub mod header;
pub mod media;
pub mod overlays;
pub mod pagination;
pub mod projects;
pub mod search;
pub mod sections;
pub mod tabs;
