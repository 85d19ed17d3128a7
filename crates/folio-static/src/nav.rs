//! Site navigation.
//!
//! The link list is fixed: Home, Projects, Demos, the CV download and the
//! owner's GitHub and LinkedIn profiles. Only the targets are configurable.

use serde::Serialize;

/// How a navigation link behaves when followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Page on this site
    Internal,
    /// File served for download
    Download,
    /// Page on another site, opened in a new tab
    External,
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label
    pub label: String,
    /// Link target
    pub href: String,
    pub kind: LinkKind,
}

/// Configurable link targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// CV file, relative to the static directory
    pub cv: String,

    /// GitHub profile URL
    pub github: String,

    /// LinkedIn profile URL
    pub linkedin: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            cv: "CV & Portfolio.pdf".to_string(),
            github: "https://github.com/thomasocompton".to_string(),
            linkedin: "https://linkedin.com/in/thomasocompton".to_string(),
        }
    }
}

/// The navigation shown on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    links: Vec<NavLink>,
    cv_href: String,
}

impl Navigation {
    /// Build the link list for a site mounted at `base_url`.
    pub fn new(base_url: &str, config: &NavConfig) -> Self {
        let cv_href = format!("{}{}", base_url, config.cv.trim_start_matches('/'));

        let links = vec![
            link("Home", base_url.to_string(), LinkKind::Internal),
            link("Projects", format!("{}projects", base_url), LinkKind::Internal),
            link("Demos", format!("{}demos", base_url), LinkKind::Internal),
            link("CV", cv_href.clone(), LinkKind::Download),
            link("GitHub", config.github.clone(), LinkKind::External),
            link("LinkedIn", config.linkedin.clone(), LinkKind::External),
        ];

        Self { links, cv_href }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Target of the CV download.
    pub fn cv_href(&self) -> &str {
        &self.cv_href
    }
}

fn link(label: &str, href: String, kind: LinkKind) -> NavLink {
    NavLink {
        label: label.to_string(),
        href,
        kind,
    }
}
