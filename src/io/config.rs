// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio configuration loading.
//!
//! This module reads the portfolio payload from YAML or JSON, chosen by
//! file extension.

use crate::models::portfolio::Portfolio;
use anyhow::{bail, ensure, Context, Result};
use std::path::Path;

/// Parse a portfolio from a YAML string.
pub fn from_yaml_str(yaml: &str) -> Result<Portfolio> {
    let data = serde_yaml::from_str(yaml)?;
    validate(data)
}

/// Parse a portfolio from a JSON string.
pub fn from_json_str(json: &str) -> Result<Portfolio> {
    let data = serde_json::from_str(json)?;
    validate(data)
}

/// Load a portfolio file, picking the format from its extension.
pub fn load(path: &Path) -> Result<Portfolio> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str());
    let portfolio = match extension {
        Some("yaml") | Some("yml") => from_yaml_str(&text),
        Some("json") => from_json_str(&text),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    log::info!(
        "Loaded portfolio from {} ({} projects)",
        path.display(),
        portfolio.projects().len()
    );
    Ok(portfolio)
}

fn validate(data: Portfolio) -> Result<Portfolio> {
    ensure!(
        data.settings.projects_per_page > 0,
        "settings.projectsPerPage must be at least 1"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "profile": {
            "name": "Sam",
            "bio": ["builds things", "writes sometimes"],
            "socials": { "twitter": "https://x.com/sam", "github": "https://github.com/sam" },
            "image": "me.png"
        },
        "tabs": {
            "proof-of-work": {
                "title": "proof of work",
                "projects": [
                    {
                        "title": "folio",
                        "description": "portfolio viewer",
                        "tags": ["rust", "gui"],
                        "liveLink": "https://folio.example",
                        "desktopOnly": true,
                        "video": "",
                        "photos": ["a.png", "b.png"]
                    },
                    { "title": "bare", "description": "no media", "tags": [] }
                ]
            },
            "cool-things": {
                "title": "cool things",
                "items": [{ "title": "post", "link": "https://blog.example", "date": "2024", "description": "d" }]
            },
            "experience": { "title": "experience", "items": [] },
            "wins": {
                "title": "wins",
                "items": [{ "title": "1st", "event": "hack", "date": "2023", "logo": "h.png" }]
            },
            "testimonials": { "title": "testimonials", "items": [] }
        },
        "settings": { "projectsPerPage": 10 }
    }"#;

    #[test]
    fn test_parse_json_payload() {
        let portfolio = from_json_str(JSON).unwrap();

        assert_eq!(portfolio.profile.name, "Sam");
        let socials: Vec<_> = portfolio.profile.socials.keys().cloned().collect();
        assert_eq!(socials, vec!["twitter", "github"]);
        assert_eq!(portfolio.settings.projects_per_page, 10);

        let folio = &portfolio.projects()[0];
        assert!(folio.desktop_only);
        assert!(!folio.has_video());
        assert_eq!(folio.photos.len(), 2);

        let bare = &portfolio.projects()[1];
        assert!(bare.link.is_none());
        assert!(bare.photos.is_empty());

        assert_eq!(portfolio.tabs.posts.items.len(), 1);
        assert!(portfolio.tabs.awards.items[0].link.is_none());
    }

    #[test]
    fn test_parse_yaml_with_aliases() {
        let yaml = r#"
profile:
  name: Sam
tabs:
  work:
    title: work
    projects:
      - title: folio
        description: viewer
        tags: [rust]
        video: demo.mp4
  posts: { title: posts }
  experience: { title: experience }
  awards: { title: awards }
  testimonials: { title: testimonials }
settings:
  projectsPerPage: 3
"#;
        let portfolio = from_yaml_str(yaml).unwrap();
        assert_eq!(portfolio.projects()[0].video(), Some("demo.mp4"));
        assert!(portfolio.tabs.posts.items.is_empty());
        assert!(portfolio.profile.bio.is_empty());
    }

    #[test]
    fn test_demo_portfolio_parses() {
        let portfolio = from_yaml_str(include_str!("../../demos/portfolio.yaml")).unwrap();
        assert_eq!(portfolio.settings.projects_per_page, 3);
        assert_eq!(portfolio.projects().len(), 4);
        assert!(portfolio.projects()[1].desktop_only);
        assert_eq!(portfolio.tabs.testimonials.items.len(), 3);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let json = JSON.replace("\"projectsPerPage\": 10", "\"projectsPerPage\": 0");
        let err = from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("projectsPerPage"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load(Path::new("no-such-dir/portfolio.yaml")).unwrap_err();
        assert!(err.to_string().contains("portfolio.yaml"));
    }
}
