// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio data and the UI state machines derived from it.

pub mod carousel;
pub mod controls;
pub mod filter;
pub mod fullscreen;
pub mod link_guard;
pub mod pagination;
pub mod portfolio;
