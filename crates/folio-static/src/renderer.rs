//! Page rendering.
//!
//! Every render method is a pure function of its inputs and the site
//! metadata: the same content always produces byte-identical HTML.

use serde::Serialize;

use folio_content::{Catalog, ProjectRecord, RecordNotFound, SiteContent};

use crate::nav::{NavLink, Navigation};
use crate::templates::TemplateEngine;

/// Site-wide values shown on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    /// Site name, shown in the header and footer
    pub name: String,

    /// Base URL the site is mounted at, with trailing slash
    pub base_url: String,

    /// Copyright year in the footer
    pub year: i32,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            base_url: "/".to_string(),
            year: 2025,
        }
    }
}

/// Whether a document represents a found page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Page title (without site name)
    pub title: String,

    /// Full HTML document
    pub html: String,

    pub status: PageStatus,
}

/// Errors that can occur when rendering.
#[derive(Debug, thiserror::Error)]
#[error("Failed to render {template}: {source}")]
pub struct RenderError {
    pub template: &'static str,
    pub source: minijinja::Error,
}

/// Values every template sees.
#[derive(Serialize)]
struct Layout<'a, P: Serialize> {
    title: &'a str,
    description: Option<&'a str>,
    site_name: &'a str,
    base_url: &'a str,
    year: i32,
    nav: &'a [NavLink],
    #[serde(flatten)]
    page: P,
}

#[derive(Serialize)]
struct HomePage<'a> {
    profile: &'a folio_content::Profile,
    featured: Vec<&'a ProjectRecord>,
    cv_href: &'a str,
    has_contact: bool,
}

#[derive(Serialize)]
struct ListingPage<'a> {
    projects: &'a [ProjectRecord],
}

#[derive(Serialize)]
struct DetailPage<'a> {
    project: &'a ProjectRecord,
}

#[derive(Serialize)]
struct DemosPage<'a> {
    demos: Vec<&'a ProjectRecord>,
}

#[derive(Serialize)]
struct NotFoundPage<'a> {
    message: &'a str,
    back_href: String,
    back_label: &'a str,
}

/// Renders portfolio pages from validated content.
pub struct Renderer {
    templates: TemplateEngine,
    site: SiteMeta,
    nav: Navigation,
}

impl Renderer {
    /// Create a renderer for one site.
    pub fn new(site: SiteMeta, nav: Navigation) -> Self {
        Self {
            templates: TemplateEngine::new(),
            site,
            nav,
        }
    }

    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    /// Render the navigation header on its own.
    pub fn render_nav(&self) -> Result<String, RenderError> {
        self.render("nav.html", "", None, ())
    }

    /// Render the home page: profile sections plus featured projects.
    pub fn render_home(&self, content: &SiteContent) -> Result<Document, RenderError> {
        let profile = &content.profile;
        let page = HomePage {
            profile,
            featured: content.featured(),
            cv_href: self.nav.cv_href(),
            has_contact: !profile.contact.is_empty(),
        };

        let html = self.render("home.html", "", profile.summary.as_deref(), page)?;

        Ok(Document {
            title: profile.name.clone(),
            html,
            status: PageStatus::Ok,
        })
    }

    /// Render the project listing, one card per record in catalog order.
    pub fn render_listing(&self, catalog: &Catalog) -> Result<Document, RenderError> {
        let page = ListingPage {
            projects: catalog.records(),
        };

        let html = self.render("projects.html", "Projects", None, page)?;

        Ok(Document {
            title: "Projects".to_string(),
            html,
            status: PageStatus::Ok,
        })
    }

    /// Render the detail page of a resolved record.
    pub fn render_detail(&self, record: &ProjectRecord) -> Result<Document, RenderError> {
        let description = record.tagline.as_deref().or(Some(record.description.as_str()));
        let html = self.render(
            "project.html",
            &record.title,
            description,
            DetailPage { project: record },
        )?;

        Ok(Document {
            title: record.title.clone(),
            html,
            status: PageStatus::Ok,
        })
    }

    /// Render the outcome of a lookup: the detail page, or "Project not found."
    pub fn render_project(
        &self,
        lookup: Result<&ProjectRecord, RecordNotFound>,
    ) -> Result<Document, RenderError> {
        match lookup {
            Ok(record) => self.render_detail(record),
            Err(missing) => {
                tracing::debug!("{}", missing);
                self.render_missing(
                    "Project not found.",
                    format!("{}projects", self.site.base_url),
                    "Back to Projects",
                )
            }
        }
    }

    /// Render the page listing every project that has a live demo.
    pub fn render_demos(&self, catalog: &Catalog) -> Result<Document, RenderError> {
        let page = DemosPage {
            demos: catalog.with_demos().collect(),
        };

        let html = self.render("demos.html", "Demos", None, page)?;

        Ok(Document {
            title: "Demos".to_string(),
            html,
            status: PageStatus::Ok,
        })
    }

    /// Render the generic 404 page.
    pub fn render_not_found(&self) -> Result<Document, RenderError> {
        self.render_missing("Page not found.", self.site.base_url.clone(), "Back to Home")
    }

    fn render_missing(
        &self,
        message: &str,
        back_href: String,
        back_label: &str,
    ) -> Result<Document, RenderError> {
        let page = NotFoundPage {
            message,
            back_href,
            back_label,
        };

        let html = self.render("not_found.html", "Not Found", None, page)?;

        Ok(Document {
            title: "Not Found".to_string(),
            html,
            status: PageStatus::NotFound,
        })
    }

    fn render<P: Serialize>(
        &self,
        template: &'static str,
        title: &str,
        description: Option<&str>,
        page: P,
    ) -> Result<String, RenderError> {
        let layout = Layout {
            title,
            description,
            site_name: &self.site.name,
            base_url: &self.site.base_url,
            year: self.site.year,
            nav: self.nav.links(),
            page,
        };

        self.templates
            .render(template, &layout)
            .map_err(|source| RenderError { template, source })
    }
}
