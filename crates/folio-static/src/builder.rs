//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use folio_content::{ContentError, SiteContent};

use crate::assets::AssetPipeline;
use crate::nav::{NavConfig, Navigation};
use crate::renderer::{Document, RenderError, Renderer, SiteMeta};

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding `projects.json` and `home.md`
    pub content_dir: PathBuf,

    /// Files copied verbatim into the output (CV, images)
    pub static_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify the stylesheet
    pub minify: bool,

    /// Absolute origin used for sitemap entries; no sitemap without it
    pub site_url: Option<String>,

    pub site: SiteMeta,

    pub nav: NavConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            site_url: None,
            site: SiteMeta::default(),
            nav: NavConfig::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of HTML pages written
    pub pages: usize,

    /// Number of project detail pages among them
    pub projects: usize,

    /// Number of static files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid content: {0}")]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to copy static files from {path}: {message}")]
    CopyError { path: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    renderer: Renderer,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        let nav = Navigation::new(&config.site.base_url, &config.nav);
        let renderer = Renderer::new(config.site.clone(), nav);

        Self { config, renderer }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Content errors abort before anything is written
        let content = SiteContent::load(&self.config.content_dir)?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Static files go first so generated pages win on collisions
        let assets = self.copy_static()?;

        let fixed_pages = [
            ("index.html", self.renderer.render_home(&content)?),
            (
                "projects/index.html",
                self.renderer.render_listing(&content.catalog)?,
            ),
            ("demos/index.html", self.renderer.render_demos(&content.catalog)?),
            ("404.html", self.renderer.render_not_found()?),
        ];

        for (path, doc) in &fixed_pages {
            self.write_page(path, doc)?;
        }

        // Detail pages in parallel
        content
            .catalog
            .records()
            .par_iter()
            .map(|record| {
                let doc = self.renderer.render_detail(record)?;
                self.write_page(&format!("projects/{}/index.html", record.slug), &doc)
            })
            .collect::<Result<Vec<()>, BuildError>>()?;

        self.generate_assets()?;
        self.generate_search_index(&content)?;
        self.generate_sitemap(&content)?;

        let projects = content.catalog.len();

        Ok(BuildResult {
            pages: fixed_pages.len() + projects,
            projects,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Write a rendered document under the output directory.
    fn write_page(&self, relative: &str, doc: &Document) -> Result<(), BuildError> {
        let path = self.config.output_dir.join(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&path, &doc.html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Wrote {} ({})", path.display(), doc.title);
        Ok(())
    }

    /// Copy the static directory, if there is one.
    fn copy_static(&self) -> Result<usize, BuildError> {
        let static_dir = &self.config.static_dir;
        if !static_dir.exists() {
            tracing::warn!("Static directory not found: {}", static_dir.display());
            return Ok(0);
        }

        let copied = AssetPipeline::copy_static(static_dir, &self.config.output_dir).map_err(
            |e| BuildError::CopyError {
                path: static_dir.display().to_string(),
                message: e.to_string(),
            },
        )?;

        tracing::info!("Copied {} static files from {}", copied, static_dir.display());
        Ok(copied)
    }

    /// Generate the stylesheet.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::stylesheet(self.config.minify);
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate a JSON index of projects for client-side search.
    fn generate_search_index(&self, content: &SiteContent) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = content
            .catalog
            .iter()
            .map(|record| {
                serde_json::json!({
                    "title": record.title,
                    "tagline": record.tagline,
                    "skills": record.skills,
                    "url": self.project_url(&record.slug),
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap.xml (when a site URL is configured) and robots.txt.
    fn generate_sitemap(&self, content: &SiteContent) -> Result<(), BuildError> {
        let base_url = &self.config.site.base_url;
        let mut robots = "User-agent: *\nAllow: /\n".to_string();

        if let Some(site_url) = &self.config.site_url {
            let origin = site_url.trim_end_matches('/');

            let mut paths = vec![
                base_url.clone(),
                format!("{}projects", base_url),
                format!("{}demos", base_url),
            ];
            paths.extend(content.catalog.iter().map(|r| self.project_url(&r.slug)));

            let urls: Vec<String> = paths.iter().map(|p| format!("{}{}", origin, p)).collect();

            let sitemap = self
                .renderer
                .templates()
                .render("sitemap.xml", minijinja::context! { urls => urls })
                .map_err(|source| RenderError {
                    template: "sitemap.xml",
                    source,
                })?;

            fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
                .map_err(|e| BuildError::WriteError(e.to_string()))?;

            robots.push_str(&format!("Sitemap: {}{}sitemap.xml\n", origin, base_url));
        } else {
            tracing::debug!("No site_url configured, skipping sitemap.xml");
        }

        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn project_url(&self, slug: &str) -> String {
        format!("{}projects/{}", self.config.site.base_url, slug)
    }
}

/// Check whether a built site exists at `dir`.
pub fn is_built(dir: &Path) -> bool {
    dir.join("index.html").is_file()
}
