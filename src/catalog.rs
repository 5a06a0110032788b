//! Static project and skill tables bundled with the site.
//!
//! The tables are JSON documents compiled into the binary. They are parsed and
//! validated once at startup; the rest of the app only ever reads them.

use serde::Deserialize;
use std::collections::HashSet;
use url::Url;

const PROJECTS_JSON: &str = include_str!("../data/projects.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed {table} table: {source}")]
    Malformed {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("project id {id} is used more than once")]
    DuplicateId { id: u32 },

    #[error("project slug `{slug}` is used more than once")]
    DuplicateSlug { slug: String },

    #[error("project `{slug}` has an invalid link: {link}")]
    InvalidLink { slug: String, link: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Live,
    InProgress,
    Archived,
    Private,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::InProgress => "In Progress",
            Self::Archived => "Archived",
            Self::Private => "Private",
        }
    }

    /// Live and in-progress work gets an animated indicator.
    pub fn pulses(self) -> bool {
        matches!(self, Self::Live | Self::InProgress)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Live => "status-live",
            Self::InProgress => "status-in-progress",
            Self::Archived => "status-archived",
            Self::Private => "status-private",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PreviewMedia {
    Image { src: String },
    Gallery { images: Vec<String> },
    Video { src: String },
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct ProjectFeature {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub case_study: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Accent {
    pub gradient: Vec<String>,
    pub color: String,
}

impl Accent {
    pub fn css_gradient(&self, angle_deg: u16) -> String {
        match self.gradient.as_slice() {
            [] => self.color.clone(),
            [single] => single.clone(),
            stops => format!("linear-gradient({angle_deg}deg, {})", stops.join(", ")),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ProjectAction {
    Live(String),
    Source(String),
    CaseStudy(String),
    Fallback,
}

impl ProjectAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live(_) => "View Live",
            Self::Source(_) => "View Code",
            Self::CaseStudy(_) => "Case Study",
            Self::Fallback => "View Project",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Live(_) => "↗",
            Self::Source(_) => "◆",
            Self::CaseStudy(_) => "✦",
            Self::Fallback => "→",
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Live(href) | Self::Source(href) | Self::CaseStudy(href) => Some(href),
            Self::Fallback => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub category: Option<String>,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub full_tags: Vec<String>,
    pub accent: Accent,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub features: Vec<ProjectFeature>,
    #[serde(default)]
    pub metrics: Vec<ProjectMetric>,
    #[serde(default)]
    pub preview: Option<PreviewMedia>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn eyebrow(&self) -> &str {
        self.category.as_deref().unwrap_or(&self.subtitle)
    }

    pub fn long_text(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }

    pub fn display_tags(&self) -> &[String] {
        if self.full_tags.is_empty() {
            &self.tags
        } else {
            &self.full_tags
        }
    }

    /// Images offered to the lightbox, in display order. Empty when the project
    /// has no still images.
    pub fn image_set(&self) -> Vec<&str> {
        match &self.preview {
            Some(PreviewMedia::Gallery { images }) => images.iter().map(String::as_str).collect(),
            Some(PreviewMedia::Image { src }) => vec![src.as_str()],
            Some(PreviewMedia::Video { .. }) | None => Vec::new(),
        }
    }

    pub fn video(&self) -> Option<&str> {
        match &self.preview {
            Some(PreviewMedia::Video { src }) => Some(src),
            _ => None,
        }
    }

    pub fn actions(&self) -> Vec<ProjectAction> {
        let mut actions = Vec::with_capacity(3);

        if let Some(href) = &self.links.live {
            actions.push(ProjectAction::Live(href.clone()));
        }
        if let Some(href) = &self.links.source {
            actions.push(ProjectAction::Source(href.clone()));
        }
        if let Some(href) = &self.links.case_study {
            actions.push(ProjectAction::CaseStudy(href.clone()));
        }

        if actions.is_empty() {
            actions.push(ProjectAction::Fallback);
        }

        actions
    }

    fn link_targets(&self) -> impl Iterator<Item = &str> {
        [&self.links.live, &self.links.source, &self.links.case_study]
            .into_iter()
            .filter_map(|link| link.as_deref())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl Catalog {
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(PROJECTS_JSON, SKILLS_JSON)
    }

    pub fn from_json(projects_json: &str, skills_json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(projects_json)
            .map_err(|source| CatalogError::Malformed { table: "projects", source })?;
        let skills: Vec<Skill> = serde_json::from_str(skills_json)
            .map_err(|source| CatalogError::Malformed { table: "skills", source })?;

        validate_projects(&projects)?;

        Ok(Self { projects, skills })
    }

    pub fn find(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn featured(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    pub fn others<'a>(&'a self, featured_slug: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |project| project.slug != featured_slug)
    }
}

fn validate_projects(projects: &[Project]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for project in projects {
        if !ids.insert(project.id) {
            return Err(CatalogError::DuplicateId { id: project.id });
        }
        if !slugs.insert(project.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                slug: project.slug.clone(),
            });
        }
        if let Some(link) = project.link_targets().find(|link| !is_acceptable_link(link)) {
            return Err(CatalogError::InvalidLink {
                slug: project.slug.clone(),
                link: link.to_string(),
            });
        }
    }

    Ok(())
}

fn is_acceptable_link(link: &str) -> bool {
    if link.starts_with('/') && !link.starts_with("//") {
        return true;
    }

    Url::parse(link)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_json(id: u32, slug: &str, extra: &str) -> String {
        format!(
            r##"{{
                "id": {id},
                "slug": "{slug}",
                "title": "Title {id}",
                "subtitle": "Subtitle",
                "description": "Short",
                "tags": ["Rust"],
                "accent": {{ "gradient": ["#111", "#222"], "color": "#333" }}
                {extra}
            }}"##
        )
    }

    fn single(extra: &str) -> Project {
        let json = format!("[{}]", project_json(1, "one", extra));
        Catalog::from_json(&json, "[]")
            .expect("fixture is valid")
            .projects
            .remove(0)
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().expect("bundled tables should validate");

        assert!(!catalog.projects.is_empty());
        assert!(!catalog.skills.is_empty());
        assert!(catalog.featured("nom").is_some());
        assert_eq!(catalog.others("nom").count(), catalog.projects.len() - 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = format!("[{}, {}]", project_json(7, "a", ""), project_json(7, "b", ""));
        let result = Catalog::from_json(&json, "[]");
        assert!(matches!(result, Err(CatalogError::DuplicateId { id: 7 })));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = format!("[{}, {}]", project_json(1, "same", ""), project_json(2, "same", ""));
        let result = Catalog::from_json(&json, "[]");
        assert!(matches!(result, Err(CatalogError::DuplicateSlug { slug }) if slug == "same"));
    }

    #[test]
    fn malformed_links_are_rejected() {
        let json = format!(
            "[{}]",
            project_json(1, "bad", r#", "links": { "live": "javascript:alert(1)" }"#)
        );
        let result = Catalog::from_json(&json, "[]");
        assert!(matches!(result, Err(CatalogError::InvalidLink { .. })));

        assert!(is_acceptable_link("https://thehoopgang.xyz"));
        assert!(is_acceptable_link("/case-studies/nom"));
        assert!(!is_acceptable_link("//cdn.example.com/x"));
    }

    #[test]
    fn malformed_json_reports_table() {
        let result = Catalog::from_json("[", "[]");
        let error = result.expect_err("truncated JSON must fail");
        assert!(error.to_string().starts_with("malformed projects table"));
    }

    #[test]
    fn status_labels_and_pulse() {
        let project = single(r#", "status": "in-progress""#);
        let status = project.status.expect("status parsed");

        assert_eq!(status, ProjectStatus::InProgress);
        assert_eq!(status.label(), "In Progress");
        assert!(status.pulses());
        assert!(ProjectStatus::Live.pulses());
        assert!(!ProjectStatus::Archived.pulses());
        assert!(!ProjectStatus::Private.pulses());
    }

    #[test]
    fn image_set_prefers_gallery_then_single_image() {
        let gallery = single(r#", "preview": { "kind": "gallery", "images": ["/a.png", "/b.png"] }"#);
        assert_eq!(gallery.image_set(), vec!["/a.png", "/b.png"]);

        let image = single(r#", "preview": { "kind": "image", "src": "/only.png" }"#);
        assert_eq!(image.image_set(), vec!["/only.png"]);

        let video = single(r#", "preview": { "kind": "video", "src": "/demo.mp4" }"#);
        assert!(video.image_set().is_empty());
        assert_eq!(video.video(), Some("/demo.mp4"));

        assert!(single("").image_set().is_empty());
    }

    #[test]
    fn no_links_yields_exactly_one_fallback_action() {
        let actions = single("").actions();
        assert_eq!(actions, vec![ProjectAction::Fallback]);
        assert_eq!(actions[0].href(), None);
    }

    #[test]
    fn present_links_yield_matching_actions_without_fallback() {
        let one = single(r#", "links": { "source": "https://github.com/x/y" }"#).actions();
        assert_eq!(one, vec![ProjectAction::Source("https://github.com/x/y".to_string())]);

        let three = single(
            r#", "links": { "live": "https://x.dev", "source": "https://github.com/x", "caseStudy": "/nom" }"#,
        )
        .actions();
        assert_eq!(three.len(), 3);
        assert!(!three.contains(&ProjectAction::Fallback));
        assert_eq!(three[2].label(), "Case Study");
    }

    #[test]
    fn extended_tags_and_text_fall_back_to_short_forms() {
        let plain = single("");
        assert_eq!(plain.display_tags(), ["Rust".to_string()]);
        assert_eq!(plain.long_text(), "Short");
        assert_eq!(plain.eyebrow(), "Subtitle");

        let rich = single(r#", "fullTags": ["Rust", "Yew"], "category": "TOOLING""#);
        assert_eq!(rich.display_tags().len(), 2);
        assert_eq!(rich.eyebrow(), "TOOLING");
    }

    #[test]
    fn accent_gradient_renders_css() {
        let accent = Accent {
            gradient: vec!["#7c3aed".to_string(), "#4f46e5".to_string()],
            color: "#8b5cf6".to_string(),
        };
        assert_eq!(accent.css_gradient(135), "linear-gradient(135deg, #7c3aed, #4f46e5)");
    }
}
