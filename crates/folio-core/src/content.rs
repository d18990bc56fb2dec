//! Site content and motion settings.
//!
//! Content is read from a JSON file so the page can be re-targeted without a
//! rebuild. [`SiteContent::default`] carries the built-in portfolio.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::beam::SpringConfig;
use crate::error::{FolioError, Result};
use crate::grid::HoverItem;

/// A project card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Empty when the project has no public page.
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl ProjectEntry {
    /// Card item for the hover grid. Overlay content is built by the caller.
    pub fn to_item<C>(&self) -> HoverItem<C> {
        let mut item = HoverItem::new(&self.title, &self.description).with_link(&self.link);
        item.image = self.image.clone();
        item
    }
}

/// One year (or period) on the timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub text: String,
}

/// A group of the tech stack grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    pub title: String,
    pub items: Vec<String>,
}

/// A footer contact link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

impl ContactLink {
    /// Web links open in a new tab; `mailto:` and relative links do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// Everything the pages render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub timeline: Vec<TimelineEntry>,
    pub stacks: Vec<StackEntry>,
    /// Line above the footer contacts.
    pub contact_note: String,
    pub contacts: Vec<ContactLink>,
    pub motion: SpringConfig,
}

impl SiteContent {
    /// Load and validate content from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            projects = content.projects.len(),
            "loaded site content"
        );
        Ok(content)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<()> {
        self.motion.validate()?;
        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(FolioError::InvalidContent(format!(
                "project {index} has an empty title"
            )));
        }
        if let Some(index) = self.contacts.iter().position(|c| c.href.trim().is_empty()) {
            return Err(FolioError::InvalidContent(format!(
                "contact {index} has an empty href"
            )));
        }
        if let Some(index) = self.timeline.iter().position(|t| t.title.trim().is_empty()) {
            return Err(FolioError::InvalidContent(format!(
                "timeline entry {index} has an empty title"
            )));
        }
        Ok(())
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        let project = |title: &str, description: &str, tech: &[&str]| ProjectEntry {
            title: title.to_string(),
            description: description.to_string(),
            link: String::new(),
            image: None,
            tech: tech.iter().map(|t| t.to_string()).collect(),
        };
        let entry = |title: &str, text: &str| TimelineEntry {
            title: title.to_string(),
            text: text.to_string(),
        };
        let stack = |title: &str, items: &[&str]| StackEntry {
            title: title.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        };
        let contact = |label: &str, href: &str| ContactLink {
            label: label.to_string(),
            href: href.to_string(),
        };

        Self {
            name: "Danish".to_string(),
            tagline: "Software engineering student who can't stop tinkering with code.".to_string(),
            about: vec![
                "My coding journey started in 2019 with Unity, making interactive experiments and learning engine internals.".to_string(),
                "In 2020 I moved to Unreal Engine 4, then UE5 in 2023, chasing performance and visuals.".to_string(),
                "By 2024 I moved into desktop and web apps.".to_string(),
            ],
            projects: vec![
                project(
                    "Clipboard Manager for Windows",
                    "Advanced clipboard history and search tool for power users.",
                    &["Electron", "SQLite"],
                ),
                project(
                    "Note Taking Website",
                    "A lightweight rich-text editor with secure login and cloud sync.",
                    &["HTML", "CSS", "JavaScript"],
                ),
                project(
                    "Unity / Unreal Projects",
                    "ARPGs, horror, metroidvania and survival RPGs built in Unity, UE4 and UE5 since 2019.",
                    &["Unity", "UE4", "UE5"],
                ),
            ],
            timeline: vec![
                entry("2019", "Started programming with Unity (C#)."),
                entry("2020", "Moved to Unreal Engine 4."),
                entry("2023", "UE5 experiments and performance-focused projects."),
                entry("2024", "Switched to desktop and web app frameworks."),
            ],
            stacks: vec![
                stack("Languages", &["TS", "JS", "HTML", "CSS", "Python", "C++"]),
                stack(
                    "Frameworks & Libraries",
                    &["React", "Next.js", "TailwindCSS", "Vite", "Electron", "Tauri"],
                ),
                stack(
                    "Databases & Storage",
                    &["Supabase", "better-sqlite3", "MongoDB", "Postgres", "Prisma", "JSON/txt"],
                ),
                stack("Game Engines", &["Unity", "Unreal Engine 4", "Unreal Engine 5", "Blender"]),
                stack("Tools & IDEs", &["VS Code", "Visual Studio 2022", "Sublime Text"]),
            ],
            contact_note: "My little corner of the internet to stash cool stuff I've built. Wanna talk code, games, or cool side projects?".to_string(),
            contacts: vec![
                contact("Email", "mailto:danishmasri74@gmail.com"),
                contact("GitHub", "https://github.com/danishmasri74"),
            ],
            motion: SpringConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_is_valid() {
        let content = SiteContent::default();
        content.validate().unwrap();
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.stacks.len(), 5);
        assert_eq!(content.stacks[1].title, "Frameworks & Libraries");
        assert_eq!(content.stacks[2].items.len(), 6);
    }

    #[test]
    fn default_contacts_mark_web_links_external() {
        let contacts = SiteContent::default().contacts;
        let labels: Vec<&str> = contacts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Email", "GitHub"]);
        assert!(!contacts[0].is_external());
        assert!(contacts[1].is_external());
    }

    #[test]
    fn empty_contact_href_is_rejected() {
        let err = SiteContent::from_json(r#"{ "contacts": [{ "label": "Email", "href": "" }] }"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent(_)));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let content = SiteContent::from_json(
            r#"{ "name": "Ada", "projects": [{ "title": "Engine", "description": "x" }] }"#,
        )
        .unwrap();
        assert_eq!(content.name, "Ada");
        assert_eq!(content.projects[0].link, "");
        assert_eq!(content.motion, SpringConfig::default());
        assert!(content.timeline.len() > 0, "missing sections fall back to built-in content");
    }

    #[test]
    fn empty_project_title_is_rejected() {
        let err = SiteContent::from_json(r#"{ "projects": [{ "title": " ", "description": "x" }] }"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent(_)));
    }

    #[test]
    fn bad_motion_is_rejected() {
        let err = SiteContent::from_json(r#"{ "motion": { "mass": 0 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidSpring(_)));
    }

    #[test]
    fn project_to_item_keeps_link() {
        let mut entry = SiteContent::default().projects.remove(0);
        entry.link = "https://x".into();
        let item: HoverItem<String> = entry.to_item();
        assert!(item.has_link());
        assert!(item.content.is_none());
    }
}
