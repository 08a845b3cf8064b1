// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! folio - a native portfolio viewer
//!
//! A cross-platform desktop application that renders a static portfolio
//! file (profile, projects, posts, experience, awards and testimonials)
//! as a tabbed, filterable, paginated display with media carousels.
//!
//! Usage: `folio [portfolio.yaml|portfolio.json]`

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::{window_title, FolioApp};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load the portfolio named on the command line, if any
    let initial = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Some((io::config::load(&path)?, path)),
        None => None,
    };

    let title = initial
        .as_ref()
        .map(|(portfolio, _)| window_title(portfolio))
        .unwrap_or_else(|| "folio".to_string());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "folio",
        options,
        Box::new(move |_cc| Ok(Box::new(FolioApp::new(initial)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
