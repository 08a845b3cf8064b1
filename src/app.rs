// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the controller that owns every piece of UI state,
//! the actions the UI modules emit, and the `eframe::App` shell that draws
//! a frame from the state and feeds the resulting actions back in.

use crate::io::{config, media::base_dir};
use crate::models::{
    carousel::{CarouselStates, MediaShape, MediaSlot},
    controls::ControlsVisibility,
    filter::{filter_projects, TagSelection},
    fullscreen::FullscreenMedia,
    link_guard::LinkGuard,
    pagination::Pagination,
    portfolio::{Portfolio, ProjectId, Tabs},
};
use crate::ui::{header, media::MediaTextures, overlays, pagination, projects, search, sections, tabs};
use crate::util::platform::Platform;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Window title for a loaded portfolio.
pub fn window_title(portfolio: &Portfolio) -> String {
    format!("{} - folio", portfolio.profile.name)
}

/// Top-level content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Work,
    Posts,
    Experience,
    Awards,
    Testimonials,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Work,
        Tab::Posts,
        Tab::Experience,
        Tab::Awards,
        Tab::Testimonials,
    ];

    /// The configured title for this tab.
    pub fn title<'a>(&self, tabs: &'a Tabs) -> &'a str {
        match self {
            Tab::Work => &tabs.work.title,
            Tab::Posts => &tabs.posts.title,
            Tab::Experience => &tabs.experience.title,
            Tab::Awards => &tabs.awards.title,
            Tab::Testimonials => &tabs.testimonials.title,
        }
    }
}

/// A user intent produced by the UI modules.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    SetQuery(String),
    ToggleTag(String),
    ToggleFilterPopover,
    CloseFilterPopover,
    PrevPage,
    NextPage,
    CarouselPrev(ProjectId),
    CarouselNext(ProjectId),
    CarouselJump(ProjectId, MediaSlot),
    CarouselHover(ProjectId, bool),
    OpenFullscreen(ProjectId),
    FullscreenPrev,
    FullscreenNext,
    FullscreenJump(MediaSlot),
    CloseFullscreen,
    FollowLiveLink(ProjectId),
    ConfirmLink,
    CancelLink,
    OpenLink(String),
    /// Escape closes the topmost overlay
    Dismiss,
}

/// The visible slice of the filtered project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPage {
    pub visible: Vec<ProjectId>,
    pub page: usize,
    pub total_pages: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// All UI state, owned by one controller and changed only through [`AppState::apply`].
pub struct AppState {
    portfolio: Portfolio,
    active_tab: Tab,
    query: String,
    tags: TagSelection,
    pagination: Pagination,
    carousels: CarouselStates,
    controls: ControlsVisibility,
    fullscreen: Option<FullscreenMedia>,
    link_guard: LinkGuard,
    filter_open: bool,
}

impl AppState {
    pub fn new(portfolio: Portfolio) -> Self {
        let pagination = Pagination::new(portfolio.settings.projects_per_page);
        Self {
            portfolio,
            active_tab: Tab::Work,
            query: String::new(),
            tags: TagSelection::all(),
            pagination,
            carousels: CarouselStates::new(),
            controls: ControlsVisibility::new(),
            fullscreen: None,
            link_guard: LinkGuard::new(),
            filter_open: false,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tags(&self) -> &TagSelection {
        &self.tags
    }

    pub fn filter_open(&self) -> bool {
        self.filter_open
    }

    pub fn fullscreen(&self) -> Option<FullscreenMedia> {
        self.fullscreen
    }

    pub fn pending_link(&self) -> Option<&str> {
        self.link_guard.pending()
    }

    pub fn shape(&self, id: ProjectId) -> Option<MediaShape> {
        self.portfolio.project(id).map(MediaShape::of)
    }

    pub fn carousel_slot(&self, id: ProjectId) -> Option<MediaSlot> {
        self.carousels.current(id, self.shape(id)?)
    }

    pub fn controls_visible(&self, id: ProjectId, now: Instant) -> bool {
        self.controls.is_visible(id, now)
    }

    /// The open fullscreen view and the media layout of its project.
    fn fullscreen_view(&mut self) -> Option<(&mut FullscreenMedia, MediaShape)> {
        let view = self.fullscreen.as_mut()?;
        let shape = self.portfolio.project(view.project).map(MediaShape::of)?;
        Some((view, shape))
    }

    fn matching(&self) -> Vec<ProjectId> {
        filter_projects(self.portfolio.projects(), &self.query, &self.tags)
    }

    /// Derive the current page of filtered projects.
    pub fn work_page(&self) -> WorkPage {
        let matching = self.matching();
        let count = matching.len();
        WorkPage {
            visible: matching[self.pagination.range(count)].to_vec(),
            page: self.pagination.page(),
            total_pages: self.pagination.total_pages(count),
            can_prev: self.pagination.can_prev(),
            can_next: self.pagination.can_next(count),
        }
    }

    /// Drop expired control deadlines; returns the wait until the next one.
    pub fn expire_controls(&mut self, now: Instant) -> Option<Duration> {
        self.controls.expire(now)
    }

    /// The visible project set changed: start from the first page again.
    fn reset_listing(&mut self) {
        self.pagination.reset();
        self.controls.clear();
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action, platform: &dyn Platform, now: Instant) {
        match action {
            Action::SelectTab(tab) => {
                self.active_tab = tab;
                self.filter_open = false;
                log::info!("Switched to tab {:?}", tab);
            }
            Action::SetQuery(query) => {
                if query != self.query {
                    self.query = query;
                    self.reset_listing();
                }
            }
            Action::ToggleTag(tag) => {
                self.tags.toggle(&tag);
                self.reset_listing();
                log::info!("Tag filter: {:?}", self.tags.iter().collect::<Vec<_>>());
            }
            Action::ToggleFilterPopover => self.filter_open = !self.filter_open,
            Action::CloseFilterPopover => self.filter_open = false,
            Action::PrevPage => {
                self.pagination.prev();
                self.controls.clear();
            }
            Action::NextPage => {
                let count = self.matching().len();
                self.pagination.next(count);
                self.controls.clear();
            }
            Action::CarouselPrev(id) => {
                if let Some(shape) = self.shape(id) {
                    let slot = self.carousels.prev(id, shape);
                    self.controls.touch(id, now);
                    log::debug!("Carousel {:?} -> {:?}", id, slot);
                }
            }
            Action::CarouselNext(id) => {
                if let Some(shape) = self.shape(id) {
                    let slot = self.carousels.next(id, shape);
                    self.controls.touch(id, now);
                    log::debug!("Carousel {:?} -> {:?}", id, slot);
                }
            }
            Action::CarouselJump(id, slot) => {
                if let Some(shape) = self.shape(id) {
                    if self.carousels.jump(id, shape, slot) {
                        self.controls.touch(id, now);
                    }
                }
            }
            Action::CarouselHover(id, hovered) => self.controls.track_hover(id, hovered, now),
            Action::OpenFullscreen(id) => {
                if let Some(slot) = self.carousel_slot(id) {
                    self.fullscreen = Some(FullscreenMedia::open(id, slot));
                    log::info!("Fullscreen {:?} at {:?}", id, slot);
                }
            }
            Action::FullscreenPrev => {
                if let Some((view, shape)) = self.fullscreen_view() {
                    view.prev(shape);
                }
            }
            Action::FullscreenNext => {
                if let Some((view, shape)) = self.fullscreen_view() {
                    view.next(shape);
                }
            }
            Action::FullscreenJump(slot) => {
                if let Some((view, shape)) = self.fullscreen_view() {
                    view.jump(shape, slot);
                }
            }
            Action::CloseFullscreen => self.fullscreen = None,
            Action::FollowLiveLink(id) => {
                if let Some(project) = self.portfolio.project(id) {
                    let outcome = self.link_guard.follow(project, platform);
                    log::info!("Live link of {:?}: {:?}", id, outcome);
                }
            }
            Action::ConfirmLink => self.link_guard.confirm(platform),
            Action::CancelLink => self.link_guard.cancel(),
            Action::OpenLink(url) => platform.open_in_new_tab(&url),
            Action::Dismiss => {
                if self.link_guard.is_open() {
                    self.link_guard.cancel();
                } else if self.fullscreen.is_some() {
                    self.fullscreen = None;
                } else {
                    self.filter_open = false;
                }
            }
        }
    }
}

/// A loaded portfolio and the textures for its media.
struct Session {
    state: AppState,
    textures: MediaTextures,
}

/// Main application shell.
pub struct FolioApp {
    session: Option<Session>,
    /// Last load error, shown on the start screen
    status: Option<String>,
}

impl FolioApp {
    /// Create the app, optionally with a portfolio already loaded from `path`.
    pub fn new(initial: Option<(Portfolio, PathBuf)>) -> Self {
        let mut app = Self {
            session: None,
            status: None,
        };
        if let Some((portfolio, path)) = initial {
            app.start_session(portfolio, &path);
        }
        app
    }

    fn start_session(&mut self, portfolio: Portfolio, path: &Path) {
        self.session = Some(Session {
            state: AppState::new(portfolio),
            textures: MediaTextures::new(base_dir(path)),
        });
        self.status = None;
    }

    /// Load a portfolio file, replacing the current one on success.
    fn open_portfolio(&mut self, ctx: &egui::Context, path: PathBuf) {
        match config::load(&path) {
            Ok(portfolio) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(&portfolio)));
                self.start_session(portfolio, &path);
            }
            Err(e) => {
                log::error!("Failed to load portfolio: {:#}", e);
                self.status = Some(format!("{:#}", e));
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Portfolio...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Portfolio", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_portfolio(ctx, path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    /// Shown until a portfolio is loaded.
    fn start_screen(&mut self, ctx: &egui::Context) {
        let mut picked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading("No portfolio loaded");
                ui.add_space(10.0);
                if ui.button("Open Portfolio...").clicked() {
                    picked = rfd::FileDialog::new()
                        .add_filter("Portfolio", &["yaml", "yml", "json"])
                        .pick_file();
                }
                if let Some(ref status) = self.status {
                    ui.add_space(10.0);
                    ui.colored_label(egui::Color32::LIGHT_RED, status);
                }
            });
        });
        if let Some(path) = picked {
            self.open_portfolio(ctx, path);
        }
    }
}

/// Keyboard shortcuts: Escape dismisses, arrows page through fullscreen media.
fn keyboard_actions(ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        actions.push(Action::Dismiss);
    }
    if state.fullscreen().is_some() && state.pending_link().is_none() {
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            actions.push(Action::FullscreenPrev);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            actions.push(Action::FullscreenNext);
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.menu_bar(ctx);

        if self.session.is_none() {
            self.start_screen(ctx);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.textures.poll(ctx);

        let mut actions = Vec::new();
        keyboard_actions(ctx, &session.state, &mut actions);

        let state = &session.state;
        let textures = &mut session.textures;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.set_max_width(720.0);
                header::show(ui, &state.portfolio().profile, textures, &mut actions);
                ui.add_space(16.0);
                tabs::show(ui, &state.portfolio().tabs, state.active_tab(), &mut actions);
                ui.add_space(12.0);

                match state.active_tab() {
                    Tab::Work => {
                        let page = state.work_page();
                        search::show(ui, state, &mut actions);
                        ui.add_space(8.0);
                        projects::show(ui, state, &page.visible, textures, now, &mut actions);
                        pagination::show(ui, &page, &mut actions);
                    }
                    Tab::Posts => sections::posts(ui, &state.portfolio().tabs.posts.items, &mut actions),
                    Tab::Experience => {
                        sections::experience(ui, &state.portfolio().tabs.experience.items, textures)
                    }
                    Tab::Awards => {
                        sections::awards(ui, &state.portfolio().tabs.awards.items, textures, &mut actions)
                    }
                    Tab::Testimonials => {
                        sections::testimonials(ui, &state.portfolio().tabs.testimonials.items, textures)
                    }
                }
            });
        });

        overlays::fullscreen(ctx, state, textures, &mut actions);
        overlays::link_warning(ctx, state, &mut actions);

        for action in actions {
            session.state.apply(action, ctx, now);
        }

        if let Some(wait) = session.state.expire_controls(now) {
            ctx.request_repaint_after(wait);
        }
        if session.textures.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
