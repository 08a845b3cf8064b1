// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project search and tag filtering.
//!
//! Matching is a pure function of the query, the tag selection and the
//! project list, recomputed every frame.

use super::portfolio::{Project, ProjectId};
use indexmap::IndexSet;

/// Sentinel tag meaning "no tag restriction".
pub const ALL_TAG: &str = "all";

/// Selected filter tags. `"all"` never coexists with another tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    tags: IndexSet<String>,
}

impl Default for TagSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl TagSelection {
    /// The unrestricted selection, `{"all"}`.
    pub fn all() -> Self {
        let mut tags = IndexSet::new();
        tags.insert(ALL_TAG.to_string());
        Self { tags }
    }

    pub fn is_all(&self) -> bool {
        self.tags.contains(ALL_TAG)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Toggle a tag, keeping `"all"` mutually exclusive with the others.
    pub fn toggle(&mut self, tag: &str) {
        if tag == ALL_TAG {
            *self = Self::all();
            return;
        }

        self.tags.shift_remove(ALL_TAG);
        if !self.tags.shift_remove(tag) {
            self.tags.insert(tag.to_string());
        }
        if self.tags.is_empty() {
            *self = Self::all();
        }
    }
}

/// Check a single project against the query and tag selection.
pub fn project_matches(project: &Project, query: &str, selection: &TagSelection) -> bool {
    let query = query.to_lowercase();
    let matches_search = project.title.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query));

    let matches_tag =
        selection.is_all() || project.tags.iter().any(|tag| selection.contains(tag));

    matches_search && matches_tag
}

/// Ids of all matching projects, in configuration order.
pub fn filter_projects(projects: &[Project], query: &str, selection: &TagSelection) -> Vec<ProjectId> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| project_matches(project, query, selection))
        .map(|(index, _)| ProjectId(index))
        .collect()
}

/// Every selectable tag: `"all"` first, then distinct tags in first-seen order.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: IndexSet<&str> = IndexSet::new();
    tags.insert(ALL_TAG);
    for project in projects {
        tags.extend(project.tags.iter().map(String::as_str));
    }
    tags.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, description: &str, tags: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            link: None,
            live_link: None,
            desktop_only: false,
            video: None,
            photos: Vec::new(),
        }
    }

    fn selection(tags: &[&str]) -> TagSelection {
        let mut selection = TagSelection::all();
        for tag in tags {
            selection.toggle(tag);
        }
        selection
    }

    #[test]
    fn test_toggle_all_clears_others() {
        let mut sel = selection(&["rust", "web"]);
        sel.toggle(ALL_TAG);
        assert_eq!(sel, TagSelection::all());
    }

    #[test]
    fn test_toggle_tag_replaces_all() {
        let mut sel = TagSelection::all();
        sel.toggle("rust");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["rust"]);
        assert!(!sel.is_all());
    }

    #[test]
    fn test_toggle_last_tag_restores_all() {
        let mut sel = selection(&["rust"]);
        sel.toggle("rust");
        assert!(sel.is_all());
        assert_eq!(sel.iter().count(), 1);
    }

    #[test]
    fn test_toggle_keeps_other_tags() {
        let mut sel = selection(&["rust", "web", "ml"]);
        sel.toggle("web");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["rust", "ml"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let p = project("Folio Viewer", "A native GUI", &["Rust"]);
        let all = TagSelection::all();

        assert!(project_matches(&p, "folio", &all));
        assert!(project_matches(&p, "NATIVE", &all));
        assert!(project_matches(&p, "rus", &all));
        assert!(project_matches(&p, "", &all));
        assert!(!project_matches(&p, "python", &all));
    }

    #[test]
    fn test_tag_filter_requires_shared_tag() {
        let p = project("a", "b", &["rust", "cli"]);
        assert!(project_matches(&p, "", &selection(&["cli"])));
        assert!(project_matches(&p, "", &selection(&["web", "rust"])));
        assert!(!project_matches(&p, "", &selection(&["web"])));
        // Tag filter compares exactly, unlike search.
        assert!(!project_matches(&p, "", &selection(&["Rust"])));
    }

    #[test]
    fn test_search_and_tags_combine() {
        let projects = vec![
            project("alpha", "", &["rust"]),
            project("beta", "", &["rust"]),
            project("alphabet", "", &["web"]),
        ];

        let ids = filter_projects(&projects, "alpha", &selection(&["rust"]));
        assert_eq!(ids, vec![ProjectId(0)]);

        let ids = filter_projects(&projects, "alpha", &TagSelection::all());
        assert_eq!(ids, vec![ProjectId(0), ProjectId(2)]);
    }

    #[test]
    fn test_all_tags_order() {
        let projects = vec![
            project("a", "", &["rust", "cli"]),
            project("b", "", &["web", "rust"]),
        ];
        assert_eq!(all_tags(&projects), vec!["all", "rust", "cli", "web"]);
        assert_eq!(all_tags(&[]), vec!["all"]);
    }
}
