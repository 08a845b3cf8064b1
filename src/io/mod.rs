// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for portfolio files and media.

pub mod config;
pub mod media;
