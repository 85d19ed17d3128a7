//! Loading a whole content directory.

use std::path::Path;

use crate::catalog::{Catalog, CatalogError};
use crate::profile::{Profile, ProfileError};
use crate::record::ProjectRecord;

/// Catalog file name inside the content directory.
pub const CATALOG_FILE: &str = "projects.json";

/// Profile file name inside the content directory.
pub const PROFILE_FILE: &str = "home.md";

/// Validated content for one site.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub catalog: Catalog,
}

/// Errors that can occur when loading site content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Featured project {0:?} is not in the catalog")]
    UnknownFeatured(String),
}

impl SiteContent {
    /// Pair a profile with a catalog, checking that every featured slug resolves.
    pub fn new(profile: Profile, catalog: Catalog) -> Result<Self, ContentError> {
        if let Some(missing) = profile.featured.iter().find(|s| !catalog.contains(s)) {
            return Err(ContentError::UnknownFeatured(missing.clone()));
        }

        Ok(Self { profile, catalog })
    }

    /// Load `projects.json` and `home.md` from a content directory.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        if !content_dir.is_dir() {
            return Err(ContentError::DirectoryNotFound(
                content_dir.display().to_string(),
            ));
        }

        let catalog = Catalog::load(&content_dir.join(CATALOG_FILE))?;
        let profile = Profile::load(&content_dir.join(PROFILE_FILE))?;

        tracing::info!(
            "Loaded {} projects and profile for {} from {}",
            catalog.len(),
            profile.name,
            content_dir.display()
        );

        Self::new(profile, catalog)
    }

    /// Featured records in the order the profile lists them.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.profile
            .featured
            .iter()
            .filter_map(|slug| self.catalog.get(slug))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PROJECTS: &str = r#"[
        {"slug": "ocr-evaluation", "title": "OCR Accuracy Evaluation", "description": "WER/CER"},
        {"slug": "debate-simulator", "title": "Database Debate Simulator", "description": "RAG"}
    ]"#;

    fn write_content(dir: &Path, home: &str) {
        fs::write(dir.join(CATALOG_FILE), PROJECTS).unwrap();
        fs::write(dir.join(PROFILE_FILE), home).unwrap();
    }

    #[test]
    fn loads_content_directory() {
        let temp = tempdir().unwrap();
        write_content(
            temp.path(),
            "---\nname: T\nheadline: H\nfeatured: [debate-simulator, ocr-evaluation]\n---\n",
        );

        let content = SiteContent::load(temp.path()).unwrap();

        assert_eq!(content.catalog.len(), 2);
        let featured: Vec<&str> = content.featured().iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(featured, vec!["debate-simulator", "ocr-evaluation"]);
    }

    #[test]
    fn rejects_unknown_featured_slug() {
        let temp = tempdir().unwrap();
        write_content(temp.path(), "---\nname: T\nheadline: H\nfeatured: [nope]\n---\n");

        let err = SiteContent::load(temp.path()).unwrap_err();

        assert!(matches!(err, ContentError::UnknownFeatured(slug) if slug == "nope"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();

        let err = SiteContent::load(&temp.path().join("content")).unwrap_err();

        assert!(matches!(err, ContentError::DirectoryNotFound(_)));
    }

    #[test]
    fn missing_profile_is_an_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CATALOG_FILE), PROJECTS).unwrap();

        let err = SiteContent::load(temp.path()).unwrap_err();

        assert!(matches!(err, ContentError::Profile(ProfileError::Read { .. })));
    }
}
