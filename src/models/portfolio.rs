// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio data structures.
//!
//! This module defines the read-only configuration payload: the profile,
//! the project list and the content of the auxiliary tabs. Field names
//! follow the camelCase keys of the portfolio data file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stable identifier of a project: its position in the configured list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub usize);

/// Complete portfolio payload, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub tabs: Tabs,
    pub settings: Settings,
}

impl Portfolio {
    /// Look up a project by id.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.tabs.work.projects.get(id.0)
    }

    pub fn projects(&self) -> &[Project] {
        &self.tabs.work.projects
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub bio: Vec<String>,
    /// Label → URL, in display order.
    #[serde(default)]
    pub socials: IndexMap<String, String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tabs {
    #[serde(rename = "proof-of-work", alias = "work")]
    pub work: WorkTab,
    #[serde(rename = "cool-things", alias = "posts")]
    pub posts: Section<Post>,
    pub experience: Section<Experience>,
    #[serde(rename = "wins", alias = "awards")]
    pub awards: Section<Award>,
    pub testimonials: Section<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkTab {
    pub title: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A titled tab holding a list of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section<T> {
    pub title: String,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub projects_per_page: usize,
}

/// A showcased project with optional links and media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub desktop_only: bool,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Project {
    /// The video reference, treating blank strings as absent.
    pub fn video(&self) -> Option<&str> {
        self.video
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn has_video(&self) -> bool {
        self.video().is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub event: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub message: String,
    #[serde(default)]
    pub date: String,
}

/// Placement of a testimonial within a run of messages from one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPosition {
    pub first: bool,
    pub last: bool,
}

/// Group consecutive testimonials by author, chat style.
pub fn message_runs(items: &[Testimonial]) -> Vec<RunPosition> {
    (0..items.len())
        .map(|i| RunPosition {
            first: i == 0 || items[i - 1].name != items[i].name,
            last: i + 1 == items.len() || items[i + 1].name != items[i].name,
        })
        .collect()
}
