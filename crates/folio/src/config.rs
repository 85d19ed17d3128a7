//! Configuration file (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Deserialize;

use folio_server::ServerConfig;
use folio_static::{BuildConfig, NavConfig, SiteMeta};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub nav: NavSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Absolute origin for sitemap.xml
    pub site_url: Option<String>,
    /// Footer year; the current year when unset
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentSection {
    #[serde(default = "default_content_dir")]
    pub dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NavSection {
    pub cv: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_name() -> String {
    "Portfolio".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_content_dir() -> String {
    "content".to_string()
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7777
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
            site_url: None,
            year: None,
        }
    }
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: default_minify(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ConfigFile {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Site metadata with a normalized base URL and a concrete year.
    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta {
            name: self.site.name.clone(),
            base_url: normalize_base_url(&self.site.base_url),
            year: self
                .site
                .year
                .unwrap_or_else(|| chrono::Local::now().year()),
        }
    }

    pub fn nav_config(&self) -> NavConfig {
        let defaults = NavConfig::default();
        NavConfig {
            cv: self.nav.cv.clone().unwrap_or(defaults.cv),
            github: self.nav.github.clone().unwrap_or(defaults.github),
            linkedin: self.nav.linkedin.clone().unwrap_or(defaults.linkedin),
        }
    }

    pub fn content_dir(&self) -> PathBuf {
        PathBuf::from(&self.content.dir)
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.content.static_dir)
    }

    /// Build settings, with command-line overrides applied.
    pub fn build_config(&self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            content_dir: self.content_dir(),
            static_dir: self.static_dir(),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.build.output)),
            minify: minify.unwrap_or(self.build.minify),
            site_url: self.site.site_url.clone(),
            site: self.site_meta(),
            nav: self.nav_config(),
        }
    }

    /// Server settings, with command-line overrides applied.
    pub fn server_config(&self, port: Option<u16>, open: bool) -> ServerConfig {
        ServerConfig {
            static_dir: self.static_dir(),
            port: port.unwrap_or(self.server.port),
            host: self.server.host.clone(),
            open,
        }
    }
}

/// Ensure a base URL starts and ends with `/`.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let temp = tempfile::tempdir().unwrap();

        let config = ConfigFile::load(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(config.content.dir, "content");
        assert_eq!(config.build.output, "dist");
        assert!(config.build.minify);
        assert_eq!(config.server.port, 7777);
        assert_eq!(config.site_meta().base_url, "/");
    }

    #[test]
    fn parses_sections() {
        let config = ConfigFile::parse(
            r#"
[site]
name = "Thomas Compton"
base_url = "portfolio"
year = 2024

[build]
minify = false

[nav]
github = "https://github.com/someone"
"#,
        )
        .unwrap();

        let site = config.site_meta();
        assert_eq!(site.name, "Thomas Compton");
        assert_eq!(site.base_url, "/portfolio/");
        assert_eq!(site.year, 2024);

        let nav = config.nav_config();
        assert_eq!(nav.github, "https://github.com/someone");
        assert_eq!(nav.cv, NavConfig::default().cv);

        let build = config.build_config(Some(PathBuf::from("out")), None);
        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert!(!build.minify);
    }

    #[test]
    fn rejects_malformed_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[site\nname = ").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn cli_overrides_server_port() {
        let config = ConfigFile::default();

        assert_eq!(config.server_config(Some(9000), false).port, 9000);
        assert_eq!(config.server_config(None, false).port, 7777);
    }

    #[test]
    fn normalizes_base_urls() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("/site"), "/site/");
        assert_eq!(normalize_base_url("site/"), "/site/");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ConfigFile::parse("[site]\nnmae = \"Typo\"\n").is_err());
        assert!(ConfigFile::parse("[biuld]\noutput = \"out\"\n").is_err());
    }
}
