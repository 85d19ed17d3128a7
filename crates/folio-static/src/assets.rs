//! Stylesheet generation and static file copying.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main CSS file, minified when requested.
    ///
    /// Falls back to the unminified stylesheet if lightningcss rejects it.
    pub fn stylesheet(minify: bool) -> String {
        let css = Self::generate_css();
        if !minify {
            return css;
        }

        match Self::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Serving unminified stylesheet: {}", e);
                css
            }
        }
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Copy every file under `source` into `dest`, byte-for-byte, keeping
    /// relative paths. Returns the number of files copied.
    pub fn copy_static(source: &Path, dest: &Path) -> io::Result<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(source).follow_links(true) {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(io::Error::other)?;
            let target = dest.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }

        Ok(copied)
    }
}

const DEFAULT_CSS: &str = r#"/* folio default theme */

:root {
  --background: #f9fafb;
  --foreground: #111827;
  --muted: #6b7280;
  --card: #ffffff;
  --border: #e5e7eb;
  --primary: #4f46e5;
  --primary-hover: #4338ca;
  --primary-foreground: #ffffff;
  --badge: #f3f4f6;
  --radius: 0.75rem;
  --content-max-width: 64rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans, Inter, system-ui, -apple-system, sans-serif);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

a {
  color: var(--primary);
}

/* Header */
.site-header {
  background: var(--card);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  position: sticky;
  top: 0;
  z-index: 50;
}

.site-header-inner {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
}

.site-name {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--foreground);
  text-decoration: none;
}

.site-nav {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
}

.nav-link {
  color: var(--muted);
  text-decoration: none;
  transition: color 0.15s;
}

.nav-link:hover {
  color: var(--primary);
}

/* Layout */
.main {
  flex-grow: 1;
  width: 100%;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.section {
  margin-bottom: 5rem;
}

.section h1,
.section h2 {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 2rem;
}

.muted {
  color: var(--muted);
  font-size: 0.875rem;
}

.empty {
  color: var(--muted);
  text-align: center;
}

/* Hero */
.hero {
  text-align: center;
  margin-bottom: 4rem;
}

.hero h1 {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.headline {
  font-size: 1.25rem;
  color: var(--primary);
  font-weight: 500;
  margin-bottom: 1.5rem;
}

.summary {
  font-size: 1.125rem;
  max-width: 56rem;
  margin: 0 auto 2.5rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

.button {
  display: inline-flex;
  align-items: center;
  padding: 0.75rem 2rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  color: var(--foreground);
  text-decoration: none;
  transition: background 0.15s;
}

.button:hover {
  background: var(--badge);
}

.button-primary {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--primary-foreground);
}

.button-primary:hover {
  background: var(--primary-hover);
}

/* Project cards */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 2rem;
}

.project-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
  transition: transform 0.15s;
}

.project-card:hover {
  transform: scale(1.02);
}

.project-title {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.project-title a {
  color: var(--foreground);
  text-decoration: none;
}

.project-tagline {
  color: var(--primary);
  margin-bottom: 0.5rem;
}

.project-description {
  color: var(--muted);
  margin-bottom: 1rem;
}

.project-actions {
  display: flex;
  gap: 1rem;
}

.action {
  font-weight: 500;
  text-decoration: none;
}

.action:hover {
  text-decoration: underline;
}

/* Skill badges */
.skills {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.skill {
  background: var(--badge);
  border: 1px solid var(--border);
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 500;
  padding: 0.25rem 0.75rem;
}

.skill-groups {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 2rem;
}

.skill-group {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.skill-group h3 {
  margin-bottom: 1rem;
}

/* Detail page */
.project-detail h1 {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.project-detail h2 {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

.back-link {
  display: inline-block;
  margin-bottom: 2rem;
  text-decoration: none;
}

.description {
  font-size: 1.125rem;
  margin-bottom: 2.5rem;
}

.demo,
.technologies {
  margin-bottom: 2.5rem;
}

.demo-frame {
  position: relative;
  padding-bottom: 75%;
  height: 0;
  margin-bottom: 1rem;
}

.demo-frame iframe {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  border: none;
  border-radius: var(--radius);
}

/* Home sections */
.prose p {
  margin-bottom: 1rem;
}

.education {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.education-item {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.education-logo {
  width: 5rem;
  height: 5rem;
  border-radius: 9999px;
}

.publications {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.certification {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.certification-image {
  display: block;
  max-width: 20rem;
  margin: 1rem auto 0;
  border-radius: var(--radius);
}

.contact-links {
  list-style: none;
  display: flex;
  justify-content: center;
  gap: 1.5rem;
}

.not-found {
  text-align: center;
  padding: 6rem 0;
}

.footer {
  padding: 1.5rem;
  text-align: center;
  color: var(--muted);
  font-size: 0.875rem;
}

@media (max-width: 640px) {
  .hero h1 {
    font-size: 2.25rem;
  }

  .site-nav {
    gap: 1rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".project-card"));
        assert!(css.contains(".site-nav"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.skill {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".skill"));
    }

    #[test]
    fn unminified_stylesheet_is_untouched() {
        assert_eq!(AssetPipeline::stylesheet(false), DEFAULT_CSS);
    }

    #[test]
    fn copies_static_files_byte_for_byte() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("static");
        let dest = temp.path().join("dist");
        fs::create_dir_all(source.join("images")).unwrap();

        let pdf = [0x25, 0x50, 0x44, 0x46, 0x00, 0xff, 0x10];
        fs::write(source.join("CV & Portfolio.pdf"), pdf).unwrap();
        fs::write(source.join("images").join("cert.webp"), b"RIFF....WEBP").unwrap();

        let copied = AssetPipeline::copy_static(&source, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dest.join("CV & Portfolio.pdf")).unwrap(), pdf);
        assert!(dest.join("images").join("cert.webp").exists());
    }
}
